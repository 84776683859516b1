//! Chinese numerals, grouped by myriads (10^4).
//!
//! Zeros are read at most once per run and only when a nonzero digit follows,
//! which may be several groups later. That look-ahead is carried by an
//! [`Elision`] value that each group render takes and hands back.
use crate::{
    grammar::{
        SpellError, SpellNumber, SpellOptions, check_power,
        chunk::{CJK_WIDTH, DigitGroup, groups, highest_power},
        words::Words,
    },
    number::Number,
};

/// Glyph table of one script.
#[derive(Debug)]
pub struct CjkGlyphs {
    pub zero: &'static str,
    pub minus: &'static str,
    /// `digits[d]` for d in 0..=9.
    pub digits: [&'static str; 10],
    pub ten: &'static str,
    pub hundred: &'static str,
    pub thousand: &'static str,
    /// `scales[p - 1]` names 10^(4p).
    pub scales: &'static [&'static str],
}

pub static ZH_CN_GLYPHS: CjkGlyphs = CjkGlyphs {
    zero: "零",
    minus: "负",
    digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    ten: "十",
    hundred: "百",
    thousand: "千",
    scales: &[
        "万", "亿", "兆", "京", "垓", "秭", "穰", "沟", "涧", "正", "载",
    ],
};

pub static ZH_TW_GLYPHS: CjkGlyphs = CjkGlyphs {
    zero: "零",
    minus: "負",
    digits: ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"],
    ten: "拾",
    hundred: "佰",
    thousand: "仟",
    scales: &[
        "萬", "億", "兆", "京", "垓", "秭", "穰", "溝", "澗", "正", "載",
    ],
};

pub const ZH_CN: CjkGrammar = CjkGrammar::new("zh_CN", &ZH_CN_GLYPHS);
pub const ZH_TW: CjkGrammar = CjkGrammar::new("zh_TW", &ZH_TW_GLYPHS);

const TENS_SLOT: usize = 2;

/// Zero-reading state threaded from group to group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elision {
    /// Some nonzero digit has been rendered.
    pub seen_nonzero: bool,
    /// Zeros were skipped since the last rendered digit.
    pub pending_zero: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CjkGrammar {
    pub locale: &'static str,
    pub glyphs: &'static CjkGlyphs,
}

impl CjkGrammar {
    pub const fn new(locale: &'static str, glyphs: &'static CjkGlyphs) -> Self {
        Self { locale, glyphs }
    }

    /// Render one group and return the updated elision state.
    ///
    /// `total_len` is the digit count of the whole number, needed for the
    /// leading-ten rule.
    pub fn render_group(
        &self,
        group: &DigitGroup<CJK_WIDTH>,
        total_len: usize,
        mut state: Elision,
        words: &mut Words,
    ) -> Elision {
        let g = self.glyphs;
        let positions = [Some(g.thousand), Some(g.hundred), Some(g.ten), None];
        let mut rendered = false;

        for (slot, (&digit, position)) in group.slots.iter().zip(positions).enumerate() {
            if digit < 0 {
                continue;
            }
            if digit == 0 {
                if state.seen_nonzero {
                    state.pending_zero = true;
                }
                continue;
            }

            if state.pending_zero {
                words.push(g.zero);
                state.pending_zero = false;
            }
            let bare_ten = slot == TENS_SLOT && is_leading_ten(digit, total_len);
            if !bare_ten {
                words.push(g.digits[digit as usize]);
            }
            if let Some(position) = position {
                words.push(position);
            }
            state.seen_nonzero = true;
            rendered = true;
        }

        if rendered {
            // Trailing zeros of the group are covered by its scale word.
            state.pending_zero = false;
            if let Some(scale) = group.power.checked_sub(1).and_then(|i| g.scales.get(i)) {
                words.push(scale);
            }
        }
        state
    }
}

/// Numbers from 10 to 19 read "十…" rather than "一十…".
#[inline]
pub fn is_leading_ten(tens: i8, total_len: usize) -> bool {
    tens == 1 && total_len <= 2
}

impl SpellNumber for CjkGrammar {
    fn spell(&self, value: &Number, _options: &SpellOptions) -> Result<String, SpellError> {
        if value.has_fraction() {
            tracing::debug!(locale = self.locale, %value, "fractional input rejected");
            return Err(SpellError::UnsupportedFraction {
                locale: self.locale,
            });
        }

        let digits = value.integer_digits();
        check_power(
            self.locale,
            highest_power(digits.len(), CJK_WIDTH),
            self.max_power(),
        )?;

        let mut words = Words::new("");
        if value.is_negative() {
            words.push(self.glyphs.minus);
        }
        if value.is_zero() {
            words.push(self.glyphs.zero);
            return Ok(words.into_string());
        }

        let mut state = Elision::default();
        for group in groups::<CJK_WIDTH>(digits) {
            state = self.render_group(&group, digits.len(), state, &mut words);
        }
        Ok(words.into_string())
    }

    #[inline]
    fn zero_word(&self) -> &'static str {
        self.glyphs.zero
    }

    #[inline]
    fn minus_word(&self) -> &'static str {
        self.glyphs.minus
    }

    #[inline]
    fn max_power(&self) -> usize {
        self.glyphs.scales.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Elision, ZH_CN, ZH_TW, is_leading_ten};
    use crate::{
        grammar::{
            SpellError, SpellNumber,
            chunk::group_at,
            words::Words,
        },
        number::Number,
    };

    fn cn(n: impl Into<Number>) -> String {
        ZH_CN.to_text(&n.into()).unwrap()
    }

    fn tw(n: impl Into<Number>) -> String {
        ZH_TW.to_text(&n.into()).unwrap()
    }

    #[test]
    fn simplified_basics() {
        assert_eq!(cn(0), "零");
        assert_eq!(cn(1), "一");
        assert_eq!(cn(-1), "负一");
        assert_eq!(cn(127), "一百二十七");
        assert_eq!(cn(256), "二百五十六");
        assert_eq!(cn(1000), "一千");
    }

    #[test]
    fn myriad_scales() {
        assert_eq!(cn(1000000), "一百万");
        assert_eq!(cn(2000000), "二百万");
        assert_eq!(cn(1200000), "一百二十万");
        assert_eq!(cn(2427000), "二百四十二万七千");
        assert_eq!(cn(100000000), "一亿");
    }

    #[test]
    fn leading_ten() {
        assert!(is_leading_ten(1, 2));
        assert!(!is_leading_ten(1, 3));
        assert!(!is_leading_ten(2, 2));
        assert_eq!(cn(10), "十");
        assert_eq!(cn(15), "十五");
        assert_eq!(cn(110), "一百一十");
        assert_eq!(cn(100000), "一十万");
    }

    #[test]
    fn zero_runs_collapse() {
        assert_eq!(cn(1005), "一千零五");
        assert_eq!(cn(1050), "一千零五十");
        assert_eq!(cn(1001), "一千零一");
        assert_eq!(cn(10005), "一万零五");
        assert_eq!(cn(100000005), "一亿零五");
        assert_eq!(cn(105000000), "一亿零五百万");
    }

    #[test]
    fn zero_elision_across_groups() {
        // Trailing zeros before a scale word are silent.
        assert_eq!(cn(102000), "一十万二千");
        assert_eq!(cn(12000034), "一千二百万零三十四");
        // A skipped myriad group is read as one zero.
        assert_eq!(cn(100002000), "一亿零二千");
        assert_eq!(cn(-300000000010_i64), "负三千亿零一十");
    }

    #[test]
    fn group_render_threads_state() {
        let mut words = Words::new("");
        let group = group_at::<4>("10000", 0);
        let state = ZH_CN.render_group(
            &group,
            5,
            Elision {
                seen_nonzero: true,
                pending_zero: false,
            },
            &mut words,
        );
        assert!(words.is_empty());
        assert_eq!(
            state,
            Elision {
                seen_nonzero: true,
                pending_zero: true
            }
        );

        let mut words = Words::new("");
        let state = ZH_CN.render_group(&group_at::<4>("10030", 0), 5, state, &mut words);
        assert_eq!(words.into_string(), "零三十");
        assert!(!state.pending_zero);
    }

    #[test]
    fn traditional_glyphs() {
        assert_eq!(tw(0), "零");
        assert_eq!(tw(1), "壹");
        assert_eq!(tw(-1), "負壹");
        assert_eq!(tw(127), "壹佰贰拾柒");
        assert_eq!(tw(256), "贰佰伍拾陆");
        assert_eq!(tw(1000), "壹仟");
        assert_eq!(tw(1000000), "壹佰萬");
        assert_eq!(tw(2427000), "贰佰肆拾贰萬柒仟");
    }

    #[test]
    fn traditional_zero_elision() {
        assert_eq!(tw(10005), "壹萬零伍");
        assert_eq!(tw(100010), "壹拾萬零壹拾");
        assert_eq!(tw(100002000), "壹億零贰仟");
        assert_eq!(tw(15), "拾伍");
    }

    #[test]
    fn fractions_are_rejected() {
        let value: Number = "1.5".parse().unwrap();
        assert_eq!(
            ZH_CN.to_text(&value),
            Err(SpellError::UnsupportedFraction { locale: "zh_CN" })
        );
        assert_eq!(cn(Number::parse("12.000").unwrap()), "十二");
    }
}
