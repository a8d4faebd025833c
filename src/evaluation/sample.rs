use crate::Score;
use crate::UNKNOWN_LABEL;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

/// One classifier output to be evaluated.
///
/// Read from JSON Lines, one record per line:
///
/// ```text
/// {"id": "val/bus_front/0001.jpg", "scores": [0.1, -2.3, ...]}
/// {"id": "img-7", "label": "car_side", "scores": [...]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub scores: Vec<Score>,
}

impl Sample {
    pub fn new(id: impl Into<String>, label: Option<String>, scores: Vec<Score>) -> Self {
        Self {
            id: id.into(),
            label,
            scores,
        }
    }

    /// Ground-truth label: the explicit label if present, otherwise the name
    /// of the directory that holds the sample (image-folder convention).
    pub fn truth(&self) -> String {
        match self.label {
            Some(ref label) => label.clone(),
            None => Path::new(&self.id)
                .parent()
                .and_then(Path::file_name)
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        }
    }

    /// Lazily parse JSON Lines, skipping blank lines.
    pub fn stream(reader: impl BufRead) -> impl Iterator<Item = anyhow::Result<Self>> {
        reader
            .lines()
            .enumerate()
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .map(|(n, line)| {
                let line = line.with_context(|| format!("read line {}", n + 1))?;
                serde_json::from_str::<Self>(&line)
                    .with_context(|| format!("parse sample on line {}", n + 1))
            })
    }

    pub fn open(path: &Path) -> anyhow::Result<impl Iterator<Item = anyhow::Result<Self>>> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open samples {}", path.display()))?;
        Ok(Self::stream(std::io::BufReader::new(file)))
    }

    pub fn load(path: &Path) -> anyhow::Result<Vec<Self>> {
        Self::open(path)?.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_label_wins() {
        let s = Sample::new("val/bus_front/1.jpg", Some("car_side".into()), vec![]);
        assert_eq!(s.truth(), "car_side");
    }

    #[test]
    fn label_from_parent_directory() {
        let s = Sample::new("data/val/bus_front/1.jpg", None, vec![]);
        assert_eq!(s.truth(), "bus_front");
    }

    #[test]
    fn bare_file_is_unknown() {
        let s = Sample::new("1.jpg", None, vec![]);
        assert_eq!(s.truth(), UNKNOWN_LABEL);
    }

    #[test]
    fn streams_json_lines() {
        let text = r#"{"id": "a/bus_front/1.jpg", "scores": [0.5, -1.0]}

{"id": "x", "label": "car_back", "scores": [1, 2]}
"#;
        let samples = Sample::stream(text.as_bytes())
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].label, None);
        assert_eq!(samples[1].scores, vec![1.0, 2.0]);
    }

    #[test]
    fn malformed_line_names_its_number() {
        let text = "{\"id\": \"a\", \"scores\": []}\n{\"id\": 3}\n";
        let err = Sample::stream(text.as_bytes())
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
