use super::Reading;
use crate::Score;

/// Numerically stable softmax.
///
/// Absent readings are treated as -inf and receive zero mass. The largest
/// finite value is subtracted before exponentiating. If nothing is finite
/// the mass is spread uniformly so the result still sums to one.
pub fn softmax(readings: &[Reading]) -> Vec<Score> {
    let max = readings
        .iter()
        .filter_map(Reading::value)
        .filter(|x| x.is_finite())
        .reduce(Score::max);
    match max {
        None => vec![1.0 / readings.len() as Score; readings.len()],
        Some(max) => {
            let exps = readings
                .iter()
                .map(|r| r.value().map_or(0.0, |x| (x - max).exp()))
                .collect::<Vec<Score>>();
            let sum = exps.iter().sum::<Score>();
            exps.into_iter().map(|x| x / sum).collect()
        }
    }
}

/// Index of the largest value. The first one wins ties.
pub fn argmax(xs: &[Score]) -> usize {
    xs.iter()
        .copied()
        .enumerate()
        .reduce(|best, x| if x.1 > best.1 { x } else { best })
        .map(|(i, _)| i)
        .unwrap_or(0)
}
