use super::*;
use crate::Direction;
use crate::Label;
use crate::ObjectId;
use crate::Recombination;
use crate::TOP_K;
use crate::Taxonomy;
use std::collections::BTreeMap;

/// Outcome of scoring one sample against its ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// true object ranked first / within the top five
    pub object: (bool, bool),
    /// true direction ranked first / within the top five for the true object,
    /// or `None` when the ground truth has no usable direction
    pub cell: Option<(bool, bool)>,
}

/// Accumulates accuracy at (object, direction), object, and global scope
/// over one evaluation run.
///
/// Counters only ever grow. Merging two aggregators over disjoint samples
/// gives the same counters as observing every sample in one aggregator, in
/// any order.
#[derive(Debug, Clone)]
pub struct Aggregator<'t> {
    taxonomy: &'t Taxonomy,
    cells: Vec<[Accuracy; Direction::N]>,
    objects: Vec<Accuracy>,
    strays: BTreeMap<String, Accuracy>,
}

impl<'t> Aggregator<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            cells: vec![[Accuracy::default(); Direction::N]; taxonomy.n_objects()],
            objects: vec![Accuracy::default(); taxonomy.n_objects()],
            strays: BTreeMap::new(),
        }
    }

    /// Score one recombined sample against its ground-truth label.
    ///
    /// Every sample counts at object level, using the whole label as the
    /// object when it carries no direction. Only labels with a direction and
    /// an object the taxonomy knows count at cell level.
    pub fn observe(&mut self, sample: &Recombination, truth: &str) -> Verdict {
        let label = Label::from(truth);
        match self.taxonomy.object_id(label.object()) {
            Some(o) => {
                let object = self.rank_object(sample, o);
                self.objects[o].observe(object.0, object.1);
                let cell = match label.direction() {
                    Some(d) => {
                        let hits = self.rank_direction(sample, o, d);
                        self.cells[o][d.index()].observe(hits.0, hits.1);
                        Some(hits)
                    }
                    None => {
                        log::warn!("ground truth {} has no direction, object level only", truth);
                        None
                    }
                };
                Verdict { object, cell }
            }
            None => {
                log::warn!("ground truth object {} is not in the taxonomy", label.object());
                self.strays
                    .entry(label.object().to_string())
                    .or_default()
                    .observe(false, false);
                Verdict {
                    object: (false, false),
                    cell: None,
                }
            }
        }
    }

    fn rank_object(&self, sample: &Recombination, o: ObjectId) -> (bool, bool) {
        match sample.rank(o) {
            Some(rank) => (rank == 0, rank < TOP_K),
            None => (false, false),
        }
    }

    fn rank_direction(&self, sample: &Recombination, o: ObjectId, d: Direction) -> (bool, bool) {
        let top = sample.after(o).top(TOP_K);
        (top.first() == Some(&d), top.contains(&d))
    }

    /// Fold another aggregator's counters into this one.
    pub fn absorb(&mut self, other: Self) {
        for (mine, theirs) in self.cells.iter_mut().zip(other.cells) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        for (a, b) in self.objects.iter_mut().zip(other.objects) {
            *a += b;
        }
        for (object, b) in other.strays {
            *self.strays.entry(object).or_default() += b;
        }
    }

    pub fn cell(&self, o: ObjectId, d: Direction) -> &Accuracy {
        &self.cells[o][d.index()]
    }
    pub fn object(&self, o: ObjectId) -> &Accuracy {
        &self.objects[o]
    }
    /// sum over every object, known or not
    pub fn overall(&self) -> Accuracy {
        self.objects.iter().chain(self.strays.values()).sum()
    }

    pub fn finalize(self) -> Summary {
        let overall = self.overall();
        let cells = (0..self.taxonomy.n_objects())
            .filter(|o| self.taxonomy.is_directional(*o))
            .flat_map(|o| Direction::all().iter().map(move |d| (o, *d)))
            .map(|(o, d)| CellRow::new(self.taxonomy.object(o), d, *self.cell(o, d)))
            .collect::<Vec<CellRow>>();
        let objects = (0..self.taxonomy.n_objects())
            .map(|o| ObjectRow::new(self.taxonomy.object(o), *self.object(o)))
            .chain(self.strays.iter().map(|(s, a)| ObjectRow::new(s, *a)))
            .collect::<Vec<ObjectRow>>();
        log::info!(
            "aggregated {} samples across {} objects",
            overall.total(),
            objects.len()
        );
        Summary::new(cells, overall, objects)
    }
}
