use super::*;
use crate::Error;
use crate::ObjectId;
use crate::Result;
use crate::SUM_TOLERANCE;
use crate::Score;
use crate::Taxonomy;
use std::cmp::Ordering;

/// Turns one sample's raw scores into a propagated, re-normalised
/// prediction and an object ranking.
///
/// Borrows the taxonomy read-only, so one recombiner can be shared by any
/// number of worker threads.
#[derive(Debug, Clone, Copy)]
pub struct Recombiner<'t> {
    taxonomy: &'t Taxonomy,
}

impl<'t> Recombiner<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    pub fn recombine(&self, raw: &[Score]) -> Result<Recombination> {
        self.validate(raw)?;
        let plain = softmax(&raw.iter().copied().map(Reading::Present).collect::<Vec<_>>());
        let before = (0..self.taxonomy.n_objects())
            .map(|o| Profile::gather(self.taxonomy.row(o), &plain))
            .collect::<Vec<Profile>>();
        let after = before
            .iter()
            .map(Profile::propagate)
            .collect::<Vec<Profile>>();
        let flat = (0..self.taxonomy.n_classes())
            .map(|c| match self.taxonomy.owner(c) {
                (o, Some(d)) => after[o][d],
                (_, None) => Reading::Present(plain[c]),
            })
            .collect::<Vec<Reading>>();
        let probabilities = softmax(&flat);
        debug_assert!((probabilities.iter().sum::<Score>() - 1.0).abs() < SUM_TOLERANCE);
        let predicted = argmax(&probabilities);
        let baseline = argmax(&plain);
        let ranking = Self::rank(&after);
        Ok(Recombination {
            raw: raw.to_vec(),
            softmax: plain,
            before,
            after,
            probabilities,
            predicted: (predicted, self.taxonomy.owner(predicted).0),
            baseline,
            ranking,
        })
    }

    fn validate(&self, raw: &[Score]) -> Result<()> {
        if raw.len() != self.taxonomy.n_classes() {
            return Err(Error::LengthMismatch {
                expected: self.taxonomy.n_classes(),
                actual: raw.len(),
            });
        }
        match raw.iter().position(|x| x.is_nan() || *x == Score::INFINITY) {
            Some(i) => Err(Error::NonFiniteScore(i)),
            None => Ok(()),
        }
    }

    /// Objects by descending confidence. The sort is stable over ascending
    /// object ids, so ties fall back to lexicographic object order and
    /// objects with no surviving sector sink to the bottom in that order.
    fn rank(after: &[Profile]) -> Vec<ObjectId> {
        let confidences = after
            .iter()
            .map(Profile::confidence)
            .collect::<Vec<Option<Score>>>();
        let mut ranking = (0..after.len()).collect::<Vec<ObjectId>>();
        ranking.sort_by(|a, b| descending(confidences[*a], confidences[*b]));
        ranking
    }
}

fn descending(a: Option<Score>, b: Option<Score>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
