use super::*;
use crate::Direction;
use serde::Serialize;

/// Counters of one population together with their hit rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tally {
    #[serde(flatten)]
    accuracy: Accuracy,
    top1_percent: Percent,
    top5_percent: Percent,
}

impl From<Accuracy> for Tally {
    fn from(accuracy: Accuracy) -> Self {
        Self {
            accuracy,
            top1_percent: accuracy.top1_percent(),
            top5_percent: accuracy.top5_percent(),
        }
    }
}

/// Accuracy of one (object, direction) cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellRow {
    object: String,
    direction: &'static str,
    #[serde(flatten)]
    tally: Tally,
}

impl CellRow {
    pub fn new(object: &str, direction: Direction, accuracy: Accuracy) -> Self {
        Self {
            object: object.to_string(),
            direction: direction.token(),
            tally: Tally::from(accuracy),
        }
    }
    pub fn object(&self) -> &str {
        &self.object
    }
    pub fn direction(&self) -> &str {
        self.direction
    }
    pub fn accuracy(&self) -> &Accuracy {
        &self.tally.accuracy
    }
}

/// Object-level accuracy of one object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectRow {
    object: String,
    #[serde(flatten)]
    tally: Tally,
}

impl ObjectRow {
    pub fn new(object: &str, accuracy: Accuracy) -> Self {
        Self {
            object: object.to_string(),
            tally: Tally::from(accuracy),
        }
    }
    pub fn object(&self) -> &str {
        &self.object
    }
    pub fn accuracy(&self) -> &Accuracy {
        &self.tally.accuracy
    }
}

/// Final report of an evaluation run.
///
/// `Display` renders the tab-separated text report downstream tooling
/// parses; `Serialize` gives the same content as a structured record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    cells: Vec<CellRow>,
    overall: Tally,
    objects: Vec<ObjectRow>,
}

impl Summary {
    pub fn new(cells: Vec<CellRow>, overall: Accuracy, objects: Vec<ObjectRow>) -> Self {
        Self {
            cells,
            overall: Tally::from(overall),
            objects,
        }
    }
    pub fn cells(&self) -> &[CellRow] {
        &self.cells
    }
    pub fn overall(&self) -> &Accuracy {
        &self.overall.accuracy
    }
    pub fn objects(&self) -> &[ObjectRow] {
        &self.objects
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Object\tDirection\t#Samples\tTOP1 (%)\tTOP5 (%)")?;
        for row in self.cells.iter() {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                row.object,
                row.direction,
                row.tally.accuracy.total(),
                row.tally.top1_percent,
                row.tally.top5_percent,
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Overall Object Evaluation:")?;
        writeln!(
            f,
            "TOP1: {}/{} ({}%)",
            self.overall.accuracy.top1(),
            self.overall.accuracy.total(),
            self.overall.top1_percent
        )?;
        writeln!(
            f,
            "TOP5: {}/{} ({}%)",
            self.overall.accuracy.top5(),
            self.overall.accuracy.total(),
            self.overall.top5_percent
        )?;
        writeln!(f)?;
        writeln!(f, "Per Object TOP1/TOP5 Accuracy:")?;
        for row in self.objects.iter() {
            writeln!(
                f,
                "{}: TOP1 = {}/{} ({}%), TOP5 = {}/{} ({}%)",
                row.object,
                row.tally.accuracy.top1(),
                row.tally.accuracy.total(),
                row.tally.top1_percent,
                row.tally.accuracy.top5(),
                row.tally.accuracy.total(),
                row.tally.top5_percent,
            )?;
        }
        Ok(())
    }
}
