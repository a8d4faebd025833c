use crate::Score;
use std::ops::Add;
use std::ops::Div;

/// A score that may be undefined.
///
/// `Absent` marks a direction the object has no class for. It is a strict
/// unknown: any arithmetic with an absent operand is absent, so an object
/// missing some viewpoints is never boosted at the ones it has.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Reading {
    Present(Score),
    #[default]
    Absent,
}

impl Reading {
    pub fn value(&self) -> Option<Score> {
        match self {
            Self::Present(x) => Some(*x),
            Self::Absent => None,
        }
    }
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
    /// NaN and absence mean the same thing.
    pub fn from_float(x: Score) -> Self {
        if x.is_nan() {
            Self::Absent
        } else {
            Self::Present(x)
        }
    }
    /// Absent readings become NaN.
    pub fn to_float(&self) -> Score {
        self.value().unwrap_or(Score::NAN)
    }
}

/// absent + anything = absent
impl Add for Reading {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Present(a), Self::Present(b)) => Self::Present(a + b),
            _ => Self::Absent,
        }
    }
}

/// absent / anything = absent
impl Div<Score> for Reading {
    type Output = Self;
    fn div(self, rhs: Score) -> Self {
        match self {
            Self::Present(a) => Self::Present(a / rhs),
            Self::Absent => Self::Absent,
        }
    }
}

impl From<Option<Score>> for Reading {
    fn from(x: Option<Score>) -> Self {
        x.map(Self::Present).unwrap_or(Self::Absent)
    }
}

/// Renders like a float formatted with `{:.N}`, absent readings as `nan`.
impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present(x) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, x),
                None => write!(f, "{}", x),
            },
            Self::Absent => write!(f, "nan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_is_contagious() {
        let a = Reading::Present(0.5);
        assert_eq!(a + Reading::Absent, Reading::Absent);
        assert_eq!(Reading::Absent + a, Reading::Absent);
        assert_eq!(Reading::Absent / 2.0, Reading::Absent);
        assert_eq!(a + a, Reading::Present(1.0));
        assert_eq!(a / 2.0, Reading::Present(0.25));
    }

    #[test]
    fn nan_is_absent() {
        assert_eq!(Reading::from_float(Score::NAN), Reading::Absent);
        assert!(Reading::Absent.to_float().is_nan());
    }

    #[test]
    fn display_honours_precision() {
        assert_eq!(format!("{:.4}", Reading::Present(0.375)), "0.3750");
        assert_eq!(format!("{:.4}", Reading::Absent), "nan");
    }
}
