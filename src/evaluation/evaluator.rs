use super::*;
use crate::Aggregator;
use crate::Recombination;
use crate::Recombiner;
use crate::Result;
use crate::Summary;
use crate::Taxonomy;
use crate::Verdict;
use rayon::prelude::*;
use std::io::Write;

/// Drives samples through recombination and aggregation.
///
/// Sequential runs can stream a [`Detail`] report per sample. Parallel runs
/// give each rayon worker a private [`Aggregator`] and merge them once every
/// sample is done, so no counter is ever shared between threads.
pub struct Evaluator<'t> {
    recombiner: Recombiner<'t>,
    aggregator: Aggregator<'t>,
}

impl<'t> Evaluator<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            recombiner: Recombiner::new(taxonomy),
            aggregator: Aggregator::new(taxonomy),
        }
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.recombiner.taxonomy()
    }

    /// Recombine one sample and count it against its ground truth.
    pub fn observe(&mut self, sample: &Sample) -> Result<(Recombination, Verdict)> {
        let truth = sample.truth();
        let recombination = self.recombiner.recombine(&sample.scores)?;
        let verdict = self.aggregator.observe(&recombination, &truth);
        log::debug!(
            "{:<40} truth {:<24} predicted {:<24} {}",
            sample.id,
            truth,
            self.taxonomy().label(recombination.predicted_class()),
            match verdict.object {
                (true, _) => "top1",
                (false, true) => "top5",
                (false, false) => "miss",
            }
        );
        Ok((recombination, verdict))
    }

    /// Evaluate samples in order, writing the per-sample report to `detail`.
    ///
    /// Stops at the first sample that fails to load or recombine; counters
    /// from earlier samples are discarded with it.
    pub fn run<I, W>(mut self, samples: I, mut detail: W) -> anyhow::Result<Summary>
    where
        I: IntoIterator<Item = anyhow::Result<Sample>>,
        W: Write,
    {
        detail.write_all(DETAIL_HEADER.as_bytes())?;
        let mut n = 0usize;
        for sample in samples {
            let sample = sample?;
            let (recombination, _) = self.observe(&sample).map_err(|e| {
                anyhow::Error::from(e).context(format!("evaluate sample {}", sample.id))
            })?;
            write!(
                detail,
                "{}",
                Detail {
                    taxonomy: self.taxonomy(),
                    id: &sample.id,
                    truth: &sample.truth(),
                    sample: &recombination,
                }
            )?;
            n += 1;
        }
        detail.flush()?;
        log::info!("evaluated {} samples", n);
        Ok(self.finalize())
    }

    /// Evaluate samples across rayon workers. No per-sample report.
    pub fn par_run(taxonomy: &'t Taxonomy, samples: &[Sample]) -> Result<Summary> {
        let recombiner = Recombiner::new(taxonomy);
        let summary = samples
            .par_iter()
            .try_fold(
                || Aggregator::new(taxonomy),
                |mut aggregator, sample| -> Result<Aggregator<'t>> {
                    let recombination = recombiner.recombine(&sample.scores)?;
                    aggregator.observe(&recombination, &sample.truth());
                    Ok(aggregator)
                },
            )
            .try_reduce(
                || Aggregator::new(taxonomy),
                |mut a, b| {
                    a.absorb(b);
                    Ok(a)
                },
            )?
            .finalize();
        log::info!("evaluated {} samples", samples.len());
        Ok(summary)
    }

    pub fn finalize(self) -> Summary {
        self.aggregator.finalize()
    }
}
