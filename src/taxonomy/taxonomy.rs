use super::*;
use crate::ClassId;
use crate::Error;
use crate::ObjectId;
use crate::Result;
use std::collections::BTreeSet;

/// One row of the object × direction table.
pub type Row = [Option<ClassId>; Direction::N];

/// Dense objects × directions table over a [`ClassIndex`].
///
/// Objects are numbered by their lexicographic order, which doubles as the
/// canonical tie-break order when objects are ranked. Each object owns a
/// fixed row of five optional class ids; a `None` slot means the classifier
/// has no class for that viewpoint of that object.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    index: ClassIndex,
    objects: Vec<String>,
    rows: Vec<Row>,
    owners: Vec<(ObjectId, Option<Direction>)>,
}

impl Taxonomy {
    /// Accepts labels without a direction suffix as object-only classes.
    pub fn build(index: ClassIndex) -> Result<Self> {
        Self::construct(index, false)
    }
    /// Refuses any label without a direction suffix.
    pub fn strict(index: ClassIndex) -> Result<Self> {
        Self::construct(index, true)
    }

    fn construct(index: ClassIndex, strict: bool) -> Result<Self> {
        if index.is_empty() {
            return Err(Error::EmptyIndex);
        }
        let labels = index.labels().map(Label::from).collect::<Vec<Label>>();
        for (i, label) in labels.iter().enumerate() {
            if label.object().is_empty() {
                return Err(Error::EmptyLabel(i));
            }
            if label.is_object_only() {
                if strict {
                    return Err(Error::ObjectOnlyLabel(index.label(i).to_string()));
                }
                log::warn!("class {} has no direction suffix", index.label(i));
            }
        }
        let objects = labels
            .iter()
            .map(|label| label.object().to_string())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect::<Vec<String>>();
        let owners = labels
            .iter()
            .map(|label| {
                let o = objects
                    .binary_search_by(|x| x.as_str().cmp(label.object()))
                    .expect("object collected from labels");
                (o, label.direction())
            })
            .collect::<Vec<_>>();
        let mut rows = vec![[None; Direction::N]; objects.len()];
        for (class, (o, direction)) in owners.iter().enumerate() {
            if let Some(d) = direction {
                rows[*o][d.index()] = Some(class);
            }
        }
        log::info!(
            "taxonomy: {} classes, {} objects, {} directional",
            index.len(),
            objects.len(),
            rows.iter().filter(|r| r.iter().any(Option::is_some)).count()
        );
        Ok(Self {
            index,
            objects,
            rows,
            owners,
        })
    }

    pub fn index(&self) -> &ClassIndex {
        &self.index
    }
    pub fn n_classes(&self) -> usize {
        self.index.len()
    }
    pub fn n_objects(&self) -> usize {
        self.objects.len()
    }
    pub fn object(&self, o: ObjectId) -> &str {
        &self.objects[o]
    }
    pub fn objects(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(String::as_str)
    }
    pub fn object_id(&self, object: &str) -> Option<ObjectId> {
        self.objects
            .binary_search_by(|x| x.as_str().cmp(object))
            .ok()
    }
    pub fn row(&self, o: ObjectId) -> &Row {
        &self.rows[o]
    }
    pub fn cell(&self, o: ObjectId, d: Direction) -> Option<ClassId> {
        self.rows[o][d.index()]
    }
    /// true if the object has a class for at least one direction
    pub fn is_directional(&self, o: ObjectId) -> bool {
        self.rows[o].iter().any(Option::is_some)
    }
    /// object and direction a class belongs to
    pub fn owner(&self, class: ClassId) -> (ObjectId, Option<Direction>) {
        self.owners[class]
    }
    pub fn label(&self, class: ClassId) -> &str {
        self.index.label(class)
    }
}
