use super::Direction;
use crate::SEPARATOR;

/// A class label split into its object and (optional) direction halves.
///
/// `"school_bus_front"` splits on the last separator into `school_bus` and
/// `front`. A suffix that is not a known direction token leaves the whole
/// label as the object, with no direction.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Label {
    object: String,
    direction: Option<Direction>,
}

impl Label {
    pub fn new(object: impl Into<String>, direction: Option<Direction>) -> Self {
        Self {
            object: object.into(),
            direction,
        }
    }
    pub fn object(&self) -> &str {
        &self.object
    }
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
    pub fn is_object_only(&self) -> bool {
        self.direction.is_none()
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        match s.rsplit_once(SEPARATOR) {
            Some((object, suffix)) => match Direction::try_from(suffix) {
                Ok(direction) => Self::new(object, Some(direction)),
                Err(_) => Self::new(s, None),
            },
            None => Self::new(s, None),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Some(d) => write!(f, "{}{}{}", self.object, SEPARATOR, d),
            None => write!(f, "{}", self.object),
        }
    }
}
