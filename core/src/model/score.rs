use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreBucket {
    Ace,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyPlus,
}

impl ScoreBucket {
    /// Classify a hole. A hole-in-one is always an ace, whatever the par.
    /// Pars outside 3..=5 are not classified.
    #[must_use]
    pub fn classify(score: i32, par: i32) -> Option<Self> {
        if !(3..=5).contains(&par) {
            return None;
        }
        if score == 1 {
            return Some(Self::Ace);
        }
        Some(match score - par {
            i32::MIN..=-3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoubleBogeyPlus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(ScoreBucket::classify(2, 5), Some(ScoreBucket::Albatross));
        assert_eq!(ScoreBucket::classify(2, 4), Some(ScoreBucket::Eagle));
        assert_eq!(ScoreBucket::classify(3, 4), Some(ScoreBucket::Birdie));
        assert_eq!(ScoreBucket::classify(4, 4), Some(ScoreBucket::Par));
        assert_eq!(ScoreBucket::classify(5, 4), Some(ScoreBucket::Bogey));
        assert_eq!(ScoreBucket::classify(6, 4), Some(ScoreBucket::DoubleBogeyPlus));
        assert_eq!(ScoreBucket::classify(11, 4), Some(ScoreBucket::DoubleBogeyPlus));
    }

    #[test]
    fn test_ace_beats_albatross_and_eagle() {
        assert_eq!(ScoreBucket::classify(1, 5), Some(ScoreBucket::Ace));
        assert_eq!(ScoreBucket::classify(1, 3), Some(ScoreBucket::Ace));
    }

    #[test]
    fn test_odd_par_is_not_classified() {
        assert_eq!(ScoreBucket::classify(1, 6), None);
        assert_eq!(ScoreBucket::classify(4, 2), None);
    }
}
