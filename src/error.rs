use crate::ClassId;

/// Conditions that abort an evaluation run.
///
/// Anything that would otherwise produce silently wrong metrics lands here.
/// Unparseable ground-truth labels are not errors; they are logged and
/// counted at object level only.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The class index holds no labels.
    EmptyIndex,
    /// A label appears more than once, so the index is not bijective.
    DuplicateLabel(String),
    /// A label, or the object half of one, is empty.
    EmptyLabel(ClassId),
    /// A label has no direction suffix and object-only labels were refused.
    ObjectOnlyLabel(String),
    /// A score vector disagrees with the class index in length.
    LengthMismatch { expected: usize, actual: usize },
    /// A raw score is NaN or positive infinity.
    NonFiniteScore(ClassId),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIndex => write!(f, "class index is empty"),
            Self::DuplicateLabel(s) => write!(f, "duplicate class label: {}", s),
            Self::EmptyLabel(i) => write!(f, "class {} has an empty label", i),
            Self::ObjectOnlyLabel(s) => write!(f, "label has no direction: {}", s),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "score vector has {} entries, class index has {}",
                actual, expected
            ),
            Self::NonFiniteScore(i) => write!(f, "score for class {} is not finite", i),
        }
    }
}

impl std::error::Error for Error {}
