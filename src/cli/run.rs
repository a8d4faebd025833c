use super::Args;
use crate::*;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::path::PathBuf;

impl Args {
    pub fn run(self) -> anyhow::Result<Summary> {
        let index = ClassIndex::load(&self.classes)?;
        let taxonomy = match self.strict {
            true => Taxonomy::strict(index)?,
            false => Taxonomy::build(index)?,
        };
        let dir = self.directory()?;
        log::info!("output directory: {}", dir.display());
        std::fs::write(dir.join(ARGS_FILE), serde_json::to_string_pretty(&self)?)?;
        let summary = match self.parallel {
            true => {
                let samples = Sample::load(&self.scores)?;
                Evaluator::par_run(&taxonomy, &samples)?
            }
            false => {
                let path = dir.join(DETAIL_FILE);
                let detail = File::create(&path)
                    .with_context(|| format!("create {}", path.display()))?;
                log::info!("writing per-sample report to {}", path.display());
                Evaluator::new(&taxonomy).run(Sample::open(&self.scores)?, BufWriter::new(detail))?
            }
        };
        write(&dir.join(SUMMARY_FILE), &summary.to_string())?;
        if self.json {
            write(&dir.join(SUMMARY_JSON), &serde_json::to_string_pretty(&summary)?)?;
        }
        log::info!(
            "object TOP1 {}% TOP5 {}% over {} samples",
            summary.overall().top1_percent(),
            summary.overall().top5_percent(),
            summary.overall().total()
        );
        Ok(summary)
    }

    fn directory(&self) -> anyhow::Result<PathBuf> {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let dir = self.output.join(format!("eval-{}", time));
        std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(dir)
    }
}

fn write(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    log::info!("evaluation results written to {}", path.display());
    Ok(())
}
