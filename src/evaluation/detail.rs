use crate::Profile;
use crate::Recombination;
use crate::TOP_K;
use crate::Taxonomy;

/// Header written once before the first sample.
pub const DETAIL_HEADER: &str = "Test Results\n\n";

/// Per-sample report: every intermediate score table, the final
/// distribution, and both predictions.
pub struct Detail<'a> {
    pub taxonomy: &'a Taxonomy,
    pub id: &'a str,
    pub truth: &'a str,
    pub sample: &'a Recombination,
}

impl std::fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = self.taxonomy;
        let r = self.sample;
        writeln!(f, "[Image: {}]", self.id)?;
        writeln!(f, "  True label: {}", self.truth)?;
        for o in (0..t.n_objects()).filter(|o| t.is_directional(*o)) {
            let logits = Profile::gather(t.row(o), r.raw());
            writeln!(f, "  {} classification:", t.object(o))?;
            table(f, "Raw Logits", &logits)?;
            table(f, "Softmax Scores", r.before(o))?;
            table(f, "After Propagation (raw)", r.after(o))?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "Final re_softmax ({}-class softmax over propagated scores):",
            t.n_classes()
        )?;
        for (c, p) in r.probabilities().iter().enumerate() {
            writeln!(f, "  {}: {:.4}", t.label(c), p)?;
        }
        writeln!(f, "Final predicted class: {}", t.label(r.predicted_class()))?;
        writeln!(f, "Final predicted object: {}", t.object(r.predicted_object()))?;
        writeln!(f)?;
        writeln!(f, "  Predicted label (full): {}", t.label(r.baseline()))?;
        writeln!(f, "  Predicted object (TOP1): {}", t.object(r.ranking()[0]))?;
        writeln!(
            f,
            "  Top 5 objects: {}",
            r.top(TOP_K)
                .iter()
                .map(|o| t.object(*o))
                .collect::<Vec<&str>>()
                .join(", ")
        )?;
        writeln!(f)
    }
}

fn table(f: &mut std::fmt::Formatter<'_>, title: &str, profile: &Profile) -> std::fmt::Result {
    writeln!(f, "    {}:", title)?;
    for (d, reading) in profile.readings() {
        writeln!(f, "      ({}): {:.4}", d, reading)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassIndex;
    use crate::Recombiner;

    #[test]
    fn renders_every_section() {
        let index = ClassIndex::try_from(vec!["bus_front", "bus_frontside", "kite"]).unwrap();
        let t = Taxonomy::build(index).unwrap();
        let r = Recombiner::new(&t).recombine(&[2.0, 1.0, 0.0]).unwrap();
        let text = Detail {
            taxonomy: &t,
            id: "val/bus_front/7.jpg",
            truth: "bus_front",
            sample: &r,
        }
        .to_string();
        assert!(text.starts_with("[Image: val/bus_front/7.jpg]\n  True label: bus_front\n"));
        assert!(text.contains("  bus classification:\n    Raw Logits:\n      (front): 2.0000\n"));
        assert!(text.contains("      (side): nan\n"));
        assert!(!text.contains("kite classification"));
        assert!(text.contains("Final re_softmax (3-class softmax over propagated scores):"));
        assert!(text.contains("Final predicted class: bus_front\n"));
        assert!(text.contains("  Predicted label (full): bus_front\n"));
        assert!(text.contains("  Top 5 objects: bus, kite\n"));
        assert!(text.ends_with("\n\n"));
    }
}
