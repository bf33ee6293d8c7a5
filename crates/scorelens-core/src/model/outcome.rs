/// Pass/Fail outcome label derived from the aggregate score.

/// The outcome of a single student row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// Both outcomes in stacking order, bottom first.
    pub const STACK_ORDER: [Outcome; 2] = [Outcome::Fail, Outcome::Pass];

    /// Classify an aggregate score. The threshold is inclusive on the pass side.
    pub fn classify(average: f64, threshold: f64) -> Self {
        if average >= threshold {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }

    /// Display colour as RGB: green for Pass, red for Fail.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Pass => [0x2e, 0xa0, 0x43],
            Self::Fail => [0xd7, 0x3a, 0x3a],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An average of exactly the threshold passes.
    #[test]
    fn classify_is_inclusive_at_threshold() {
        assert_eq!(Outcome::classify(50.0, 50.0), Outcome::Pass);
        assert_eq!(Outcome::classify(49.999, 50.0), Outcome::Fail);
        assert_eq!(Outcome::classify(100.0, 50.0), Outcome::Pass);
    }

    #[test]
    fn pass_is_green_fail_is_red() {
        let [r, g, _] = Outcome::Pass.rgb();
        assert!(g > r);
        let [r, g, _] = Outcome::Fail.rgb();
        assert!(r > g);
    }
}
