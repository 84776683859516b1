//! Magnitude grouping of a decimal digit string.
//!
//! Groups are cut from the least significant end, `N` digits wide, and handed
//! out most significant first. Only the leading group can be narrower than `N`;
//! its missing slots hold `-1`.
use smallvec::SmallVec;

/// Western grammars group by thousands.
pub const WESTERN_WIDTH: usize = 3;
/// CJK grammars group by myriads.
pub const CJK_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup<const N: usize> {
    /// 0 for the least significant group.
    pub power: usize,
    /// Digits from the start of the number through the end of this group.
    pub span: usize,
    /// Most significant slot first; `-1` where the number has no digit.
    pub slots: [i8; N],
}

impl<const N: usize> DigitGroup<N> {
    /// A lone digit at power 0, as used for digit-by-digit fractions.
    pub fn single(digit: u8) -> Self {
        let mut slots = [-1; N];
        slots[N - 1] = digit as i8;
        Self {
            power: 0,
            span: 1,
            slots,
        }
    }

    /// First group of the number.
    #[inline]
    pub fn is_leading(&self) -> bool {
        self.span <= N
    }

    /// No slot holds a nonzero digit.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(|&d| d <= 0)
    }

    /// Numeric value of the group, absent slots counting as zero.
    pub fn value(&self) -> u32 {
        self.slots
            .iter()
            .fold(0, |acc, &d| acc * 10 + d.max(0) as u32)
    }
}

/// Highest group power needed for `len` digits.
#[inline]
pub fn highest_power(len: usize, width: usize) -> usize {
    len.saturating_sub(1) / width
}

/// The group at `power` of an ASCII digit string.
pub fn group_at<const N: usize>(digits: &str, power: usize) -> DigitGroup<N> {
    let bytes = digits.as_bytes();
    let span = bytes.len() - power * N;
    let mut slots = [-1; N];
    for (i, slot) in slots.iter_mut().enumerate() {
        if span + i >= N {
            *slot = (bytes[span + i - N] - b'0') as i8;
        }
    }
    DigitGroup { power, span, slots }
}

/// All groups of an ASCII digit string, most significant first.
pub fn groups<const N: usize>(digits: &str) -> SmallVec<[DigitGroup<N>; 13]> {
    (0..=highest_power(digits.len(), N))
        .rev()
        .map(|power| group_at::<N>(digits, power))
        .collect()
}
