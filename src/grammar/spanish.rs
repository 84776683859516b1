//! Spanish (Spain).
//!
//! Irregular forms are kept as separate named rules:
//! [`hundreds_word`] (cien / ciento), [`twenties_word`] (veinti- contractions),
//! [`unit_word`] (uno / un apocope) and [`is_bare_thousand`] (mil, not un mil).
use crate::grammar::{
    chunk::{DigitGroup, WESTERN_WIDTH},
    western::{Scale, WesternGrammar, WesternVocab},
    words::Words,
};

static SCALES: [Scale; 12] = [
    Scale::invariant("mil"),
    Scale::new("millón", "millones"),
    Scale::new("billardo", "billardos"),
    Scale::new("billón", "billones"),
    Scale::new("trillardo", "trillardos"),
    Scale::new("trillón", "trillones"),
    Scale::new("cuatrillardo", "cuatrillardos"),
    Scale::new("cuatrillón", "cuatrillones"),
    Scale::new("quintillardo", "quintillardos"),
    Scale::new("quintillón", "quintillones"),
    Scale::new("sextillardo", "sextillardos"),
    Scale::new("sextillón", "sextillones"),
];

pub static ES_ES_VOCAB: WesternVocab = WesternVocab {
    zero: "cero",
    minus: "menos",
    point: "coma",
    units: [
        "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    ],
    teens: [
        "diez",
        "once",
        "doce",
        "trece",
        "catorce",
        "quince",
        "dieciséis",
        "diecisiete",
        "dieciocho",
        "diecinueve",
    ],
    tens: [
        "", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta",
        "ochenta", "noventa",
    ],
    hundreds: [
        "",
        "ciento",
        "doscientos",
        "trescientos",
        "cuatrocientos",
        "quinientos",
        "seiscientos",
        "setecientos",
        "ochocientos",
        "novecientos",
    ],
    hundred: "cien",
    and: Some("y"),
    scales: &SCALES,
};

pub const ES_ES: WesternGrammar = WesternGrammar::new("es_ES", &ES_ES_VOCAB, render_group);

const TWENTY_PREFIX: &str = "veinti";
const APOCOPATED_ONE: &str = "un";
const APOCOPATED_TWENTY_ONE: &str = "veintiún";

/// Spanish group hook.
pub fn render_group(vocab: &WesternVocab, group: &DigitGroup<WESTERN_WIDTH>, words: &mut Words) {
    if is_bare_thousand(group) {
        words.push(vocab.scales[0].singular);
        return;
    }

    let [hundreds, tens, units] = group.slots;
    // A scale word follows, so "uno" shortens to "un".
    let apocopated = group.power > 0;

    if hundreds > 0 {
        words.push(hundreds_word(vocab, hundreds, tens, units));
    }

    match tens {
        1 => words.push(vocab.teens[units as usize]),
        2 => twenties_word(vocab, units, apocopated, words),
        t if t > 2 => {
            words.push(vocab.tens[t as usize]);
            if units > 0 {
                if let Some(and) = vocab.and {
                    words.push(and);
                }
                words.push(unit_word(vocab, units, apocopated));
            }
        }
        _ => {
            if units > 0 {
                words.push(unit_word(vocab, units, apocopated));
            }
        }
    }

    if let Some(scale) = vocab.scale(group.power) {
        words.push(scale.select(group.value()));
    }
}

/// A thousands group worth exactly one reads "mil", never "un mil".
#[inline]
pub fn is_bare_thousand(group: &DigitGroup<WESTERN_WIDTH>) -> bool {
    group.power == 1 && group.value() == 1
}

/// "cien" for exactly one hundred, "ciento" for 101–199, regular otherwise.
#[inline]
pub fn hundreds_word(vocab: &WesternVocab, hundreds: i8, tens: i8, units: i8) -> &'static str {
    if hundreds == 1 && tens <= 0 && units <= 0 {
        vocab.hundred
    } else {
        vocab.hundreds[hundreds as usize]
    }
}

/// 20–29 contract into one word; 22, 23 and 26 carry a written accent.
pub fn twenties_word(vocab: &WesternVocab, units: i8, apocopated: bool, words: &mut Words) {
    match units {
        d if d <= 0 => words.push("veinte"),
        1 if apocopated => words.push(APOCOPATED_TWENTY_ONE),
        1 => words.push_compound(&[TWENTY_PREFIX, vocab.units[1]]),
        2 => words.push("veintidós"),
        3 => words.push("veintitrés"),
        6 => words.push("veintiséis"),
        d => words.push_compound(&[TWENTY_PREFIX, vocab.units[d as usize]]),
    }
}

/// "uno" shortens to "un" in front of a scale word.
#[inline]
pub fn unit_word(vocab: &WesternVocab, units: i8, apocopated: bool) -> &'static str {
    if units == 1 && apocopated {
        APOCOPATED_ONE
    } else {
        vocab.units[units as usize]
    }
}
