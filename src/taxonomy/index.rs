use crate::ClassId;
use crate::Error;
use crate::Result;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

/// Bijective mapping between dense class ids and flat class labels.
///
/// Immutable once built. Construction rejects empty indices, empty labels,
/// and repeated labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIndex {
    labels: Vec<String>,
    lookup: BTreeMap<String, ClassId>,
}

impl ClassIndex {
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::EmptyIndex);
        }
        let mut lookup = BTreeMap::new();
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(Error::EmptyLabel(i));
            }
            if lookup.insert(label.clone(), i).is_some() {
                return Err(Error::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels, lookup })
    }

    /// One label per non-blank line; the line's rank is its class id.
    pub fn from_lines(text: &str) -> Result<Self> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Image-folder convention: sorted subdirectory names are the labels.
    pub fn from_directory(root: &Path) -> anyhow::Result<Self> {
        let mut labels = std::fs::read_dir(root)
            .with_context(|| format!("read class directory {}", root.display()))?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect::<Vec<String>>();
        labels.sort();
        Ok(Self::new(labels)?)
    }

    /// Directory listing or label file, whichever the path points at.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.is_dir() {
            Self::from_directory(path)
        } else {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read class file {}", path.display()))?;
            Ok(Self::from_lines(&text)?)
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    pub fn label(&self, id: ClassId) -> &str {
        &self.labels[id]
    }
    pub fn position(&self, label: &str) -> Option<ClassId> {
        self.lookup.get(label).copied()
    }
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<&str>> for ClassIndex {
    type Error = Error;
    fn try_from(labels: Vec<&str>) -> Result<Self> {
        Self::new(labels.into_iter().map(String::from).collect())
    }
}
