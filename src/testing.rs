pub mod grammar_contract;
