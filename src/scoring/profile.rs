use super::Reading;
use crate::Direction;
use crate::Row;
use crate::Score;
use std::ops::Index;

/// One object's scores across the five viewpoint sectors of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Profile([Reading; Direction::N]);

impl Profile {
    /// pick this object's classes out of a flat score vector
    pub fn gather(row: &Row, scores: &[Score]) -> Self {
        Self(std::array::from_fn(|i| row[i].map(|c| scores[c]).into()))
    }

    /// Single smoothing pass over the sector chain.
    ///
    /// End sectors add their only neighbour; interior sectors add the mean of
    /// both neighbours:
    ///
    /// ```text
    /// front     = front     + frontside
    /// frontside = frontside + (front + side) / 2
    /// side      = side      + (frontside + backside) / 2
    /// backside  = backside  + (side + back) / 2
    /// back      = back      + backside
    /// ```
    ///
    /// Every term reads the input profile, never a partially updated one.
    /// An absent operand anywhere in a formula makes that sector absent.
    pub fn propagate(&self) -> Self {
        Self(std::array::from_fn(|i| {
            let d = Direction::from(i);
            match (d.prev(), d.next()) {
                (Some(p), Some(n)) => self[d] + (self[p] + self[n]) / 2.0,
                (None, Some(n)) => self[d] + self[n],
                (Some(p), None) => self[d] + self[p],
                (None, None) => unreachable!("chain has more than one sector"),
            }
        }))
    }

    /// Highest present score, if any sector is present.
    pub fn confidence(&self) -> Option<Score> {
        self.0
            .iter()
            .filter_map(Reading::value)
            .reduce(Score::max)
    }

    /// Present sectors by descending score. Equal scores keep sector order.
    pub fn ranked(&self) -> Vec<Direction> {
        let mut present = Direction::all()
            .iter()
            .filter_map(|d| self[*d].value().map(|x| (*d, x)))
            .collect::<Vec<(Direction, Score)>>();
        present.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        present.into_iter().map(|(d, _)| d).collect()
    }

    pub fn best(&self) -> Option<Direction> {
        self.ranked().first().copied()
    }

    pub fn top(&self, k: usize) -> Vec<Direction> {
        self.ranked().into_iter().take(k).collect()
    }

    pub fn readings(&self) -> impl Iterator<Item = (Direction, Reading)> + '_ {
        Direction::all().iter().map(|d| (*d, self[*d]))
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(Reading::is_present)
    }
}

impl Index<Direction> for Profile {
    type Output = Reading;
    fn index(&self, d: Direction) -> &Reading {
        &self.0[d.index()]
    }
}

impl From<[Reading; Direction::N]> for Profile {
    fn from(readings: [Reading; Direction::N]) -> Self {
        Self(readings)
    }
}

/// NaN entries are absent sectors.
impl From<[Score; Direction::N]> for Profile {
    fn from(scores: [Score; Direction::N]) -> Self {
        Self(scores.map(Reading::from_float))
    }
}

impl crate::Arbitrary for Profile {
    fn random() -> Self {
        Self(std::array::from_fn(|_| match rand::random::<bool>() {
            true => Reading::Present(rand::random::<Score>()),
            false => Reading::Absent,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    const NAN: Score = Score::NAN;

    fn close(a: Reading, b: Score) -> bool {
        a.value().map_or(false, |a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn propagates_bus() {
        let bus = Profile::from([0.10, 0.30, 0.05, 0.05, 0.50]).propagate();
        assert!(close(bus[Direction::Front], 0.40));
        assert!(close(bus[Direction::FrontSide], 0.375));
        assert!(close(bus[Direction::Side], 0.225));
        assert!(close(bus[Direction::BackSide], 0.325));
        assert!(close(bus[Direction::Back], 0.55));
        assert!((bus.confidence().unwrap() - 0.55).abs() < 1e-9);
        assert_eq!(bus.best(), Some(Direction::Back));
    }

    #[test]
    fn lone_sector_cascades_to_nothing() {
        let lone = Profile::from([0.9, NAN, NAN, NAN, NAN]).propagate();
        assert!(lone.is_empty());
        assert_eq!(lone.confidence(), None);
        assert_eq!(lone.best(), None);
    }

    #[test]
    fn gap_poisons_its_neighbours_only() {
        let gap = Profile::from([0.2, 0.2, 0.2, NAN, 0.2]).propagate();
        assert!(close(gap[Direction::Front], 0.4));
        assert!(close(gap[Direction::FrontSide], 0.4));
        assert_eq!(gap[Direction::Side], Reading::Absent);
        assert_eq!(gap[Direction::BackSide], Reading::Absent);
        assert_eq!(gap[Direction::Back], Reading::Absent);
    }

    #[test]
    fn front_and_back_are_not_neighbours() {
        let ends = Profile::from([1.0, 0.0, 0.0, 0.0, 0.0]).propagate();
        assert!(close(ends[Direction::Back], 0.0));
        assert!(close(ends[Direction::FrontSide], 0.5));
    }

    #[test]
    fn propagation_is_not_idempotent() {
        let once = Profile::from([0.10, 0.30, 0.05, 0.05, 0.50]).propagate();
        let twice = once.propagate();
        assert_ne!(once, twice);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let flat = Profile::from([0.3, NAN, 0.3, 0.1, 0.3]);
        assert_eq!(
            flat.ranked(),
            vec![
                Direction::Front,
                Direction::Side,
                Direction::Back,
                Direction::BackSide
            ]
        );
        assert_eq!(flat.top(2), vec![Direction::Front, Direction::Side]);
    }

    #[test]
    fn ranking_skips_absent_sectors() {
        for _ in 0..64 {
            let p = Profile::random();
            let ranked = p.ranked();
            assert_eq!(ranked.len(), p.readings().filter(|(_, r)| r.is_present()).count());
            assert!(ranked.windows(2).all(|w| p[w[0]].value() >= p[w[1]].value()));
        }
    }
}
