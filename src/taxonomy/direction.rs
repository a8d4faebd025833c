/// Discretised azimuth sector of an object's viewpoint.
///
/// Sectors form a linear chain: `Front` and `Back` are the two ends and are
/// not adjacent to each other.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    Front = 0isize,
    FrontSide = 1isize,
    Side = 2isize,
    BackSide = 3isize,
    Back = 4isize,
}

impl Direction {
    /// Number of sectors.
    pub const N: usize = 5;

    pub const fn all() -> &'static [Self; Self::N] {
        &[
            Self::Front,
            Self::FrontSide,
            Self::Side,
            Self::BackSide,
            Self::Back,
        ]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Sector towards the front, if any.
    pub const fn prev(&self) -> Option<Self> {
        match self {
            Self::Front => None,
            Self::FrontSide => Some(Self::Front),
            Self::Side => Some(Self::FrontSide),
            Self::BackSide => Some(Self::Side),
            Self::Back => Some(Self::BackSide),
        }
    }
    /// Sector towards the back, if any.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Front => Some(Self::FrontSide),
            Self::FrontSide => Some(Self::Side),
            Self::Side => Some(Self::BackSide),
            Self::BackSide => Some(Self::Back),
            Self::Back => None,
        }
    }
    /// Label suffix used by the flat class space.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::FrontSide => "frontside",
            Self::Side => "side",
            Self::BackSide => "backside",
            Self::Back => "back",
        }
    }
}

impl From<usize> for Direction {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Front,
            1 => Self::FrontSide,
            2 => Self::Side,
            3 => Self::BackSide,
            4 => Self::Back,
            _ => panic!("no other sectors"),
        }
    }
}

/// case-sensitive: "Front" is not a direction
impl TryFrom<&str> for Direction {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.token() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid direction: {}", s))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl crate::Arbitrary for Direction {
    fn random() -> Self {
        Self::from(rand::random_range(0..Self::N))
    }
}
