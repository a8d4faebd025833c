use serde::Serialize;
use std::iter::Sum;
use std::ops::AddAssign;

/// Top-1 / top-5 hit counter over some population of samples.
///
/// A top-1 hit is always a top-5 hit, so `top1 <= top5 <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Accuracy {
    total: usize,
    top1: usize,
    top5: usize,
}

impl Accuracy {
    pub fn new(total: usize, top1: usize, top5: usize) -> Self {
        debug_assert!(top1 <= top5 && top5 <= total);
        Self { total, top1, top5 }
    }
    /// record one sample
    pub fn observe(&mut self, top1: bool, top5: bool) {
        debug_assert!(!top1 || top5, "top-1 hit outside the top-5");
        self.total.add_assign(1);
        self.top1.add_assign(top1 as usize);
        self.top5.add_assign(top5 as usize);
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn top1(&self) -> usize {
        self.top1
    }
    pub fn top5(&self) -> usize {
        self.top5
    }
    pub fn top1_percent(&self) -> Percent {
        Percent::of(self.top1, self.total)
    }
    pub fn top5_percent(&self) -> Percent {
        Percent::of(self.top5, self.total)
    }
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl AddAssign for Accuracy {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.top1 += other.top1;
        self.top5 += other.top5;
    }
}

impl Sum for Accuracy {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}

impl<'a> Sum<&'a Accuracy> for Accuracy {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Hit rate in percent, undefined when nothing was observed.
///
/// Renders with two decimals, or as the literal `nan` when undefined so an
/// empty population never reads as "always wrong".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(Option<f64>);

impl Percent {
    pub fn of(hits: usize, total: usize) -> Self {
        match total {
            0 => Self(None),
            n => Self(Some(hits as f64 / n as f64 * 100.0)),
        }
    }
    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(x) => write!(f, "{:.2}", x),
            None => write!(f, "nan"),
        }
    }
}

/// the number printed by `Display`, `null` when undefined
impl Serialize for Percent {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(_) => s.serialize_some(
                &self
                    .to_string()
                    .parse::<f64>()
                    .map_err(serde::ser::Error::custom)?,
            ),
            None => s.serialize_none(),
        }
    }
}
