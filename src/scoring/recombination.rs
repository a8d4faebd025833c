use super::Profile;
use crate::ClassId;
use crate::ObjectId;
use crate::Score;

/// Everything the recombiner derived from one sample's score vector.
#[derive(Debug, Clone)]
pub struct Recombination {
    pub(super) raw: Vec<Score>,
    pub(super) softmax: Vec<Score>,
    pub(super) before: Vec<Profile>,
    pub(super) after: Vec<Profile>,
    pub(super) probabilities: Vec<Score>,
    pub(super) predicted: (ClassId, ObjectId),
    pub(super) baseline: ClassId,
    pub(super) ranking: Vec<ObjectId>,
}

impl Recombination {
    /// scores as the classifier emitted them
    pub fn raw(&self) -> &[Score] {
        &self.raw
    }
    /// softmax of the raw scores, before propagation
    pub fn softmax(&self) -> &[Score] {
        &self.softmax
    }
    /// per-object softmax scores, indexed by object id
    pub fn before(&self, o: ObjectId) -> &Profile {
        &self.before[o]
    }
    /// per-object propagated scores, indexed by object id
    pub fn after(&self, o: ObjectId) -> &Profile {
        &self.after[o]
    }
    /// re-normalised distribution over propagated scores
    pub fn probabilities(&self) -> &[Score] {
        &self.probabilities
    }
    pub fn predicted_class(&self) -> ClassId {
        self.predicted.0
    }
    pub fn predicted_object(&self) -> ObjectId {
        self.predicted.1
    }
    /// top class of the plain softmax, ignoring propagation
    pub fn baseline(&self) -> ClassId {
        self.baseline
    }
    /// all objects, best first
    pub fn ranking(&self) -> &[ObjectId] {
        &self.ranking
    }
    pub fn top(&self, k: usize) -> &[ObjectId] {
        &self.ranking[..k.min(self.ranking.len())]
    }
    /// zero-based position of an object in the ranking
    pub fn rank(&self, o: ObjectId) -> Option<usize> {
        self.ranking.iter().position(|x| *x == o)
    }
    /// propagated confidence of an object, absent if no sector survived
    pub fn confidence(&self, o: ObjectId) -> Option<Score> {
        self.after[o].confidence()
    }
}
