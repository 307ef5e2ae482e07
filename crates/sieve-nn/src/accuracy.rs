use std::cmp::Ordering;
use std::fmt;

/// Fraction of correctly classified instances, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Accuracy(f64);

impl Accuracy {
    /// Zero accuracy.
    pub const ZERO: Self = Self(0.0);

    /// Build an accuracy from a correct count over a total. A zero total yields zero.
    #[must_use]
    pub fn from_counts(correct: usize, total: usize) -> Self {
        debug_assert!(correct <= total, "correct ({correct}) exceeds total ({total})");
        if total == 0 {
            return Self::ZERO;
        }
        Self(correct as f64 / total as f64)
    }

    /// Return the raw accuracy value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::Accuracy;

    #[test]
    fn from_counts() {
        assert_eq!(Accuracy::from_counts(3, 4).value(), 0.75);
        assert_eq!(Accuracy::from_counts(0, 0).value(), 0.0);
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", Accuracy::from_counts(1, 2)), "0.500000");
    }

    #[test]
    fn total_cmp_ordering() {
        let a = Accuracy::from_counts(1, 4);
        let b = Accuracy::from_counts(3, 4);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp(&a), Ordering::Greater);
        assert_eq!(a.total_cmp(&Accuracy::from_counts(2, 8)), Ordering::Equal);
    }
}
