/// Output buffer owned by a single spelling call.
///
/// Tokens pushed with [`Words::push`] are joined with the grammar's separator;
/// [`Words::push_compound`] glues several pieces into one token ("twenty-three",
/// "veintisiete").
#[derive(Debug)]
pub struct Words {
    text: String,
    separator: &'static str,
}

impl Words {
    #[inline]
    pub fn new(separator: &'static str) -> Self {
        Self {
            text: String::with_capacity(64),
            separator,
        }
    }

    #[inline]
    pub fn push(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push_str(self.separator);
        }
        self.text.push_str(word);
    }

    pub fn push_compound(&mut self, parts: &[&str]) {
        let mut first = true;
        for part in parts.iter().filter(|p| !p.is_empty()) {
            if first {
                self.push(part);
                first = false;
            } else {
                self.text.push_str(part);
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }
}
