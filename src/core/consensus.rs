// consensus.rs - Consensus residues with Bayesian credible intervals

use crate::core::alphabet::AMINO_ACIDS;
use crate::core::distribution::{alignment_distributions, Distribution, DistributionMode};
use crate::core::error::{Result, StatsError};
use crate::data::Alignment;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution as _};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of posterior draws per column
pub const DEFAULT_SAMPLES: usize = 100_000;

/// Default credible interval coverage
pub const DEFAULT_CI: f64 = 0.95;

/// Posterior sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusConfig {
    pub samples: usize,
    pub ci: f64,
    #[serde(default)]
    pub show_progress: bool,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            ci: DEFAULT_CI,
            show_progress: false,
        }
    }
}

/// Most probable residue of a column under the smoothed distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalResidue {
    pub index: usize,
    pub symbol: char,
    pub probability: f64,
}

/// Consensus call for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusRecord {
    pub symbol: char,
    pub probability: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Pick the highest-mass residue; ties go to the earliest alphabet symbol
pub fn modal_residue(distribution: &Distribution) -> ModalResidue {
    let mut index = 0;
    for (i, &p) in distribution.iter().enumerate().skip(1) {
        if p > distribution[index] {
            index = i;
        }
    }
    ModalResidue {
        index,
        symbol: AMINO_ACIDS.symbol(index),
        probability: distribution[index],
    }
}

/// Modal residue of every column
pub fn modal_residues(alignment: &Alignment) -> Result<Vec<ModalResidue>> {
    let distributions = alignment_distributions(alignment, DistributionMode::Smoothed)?;
    Ok(distributions.iter().map(modal_residue).collect())
}

/// Symbol-only projection: the consensus sequence as a string
pub fn consensus_sequence(alignment: &Alignment) -> Result<String> {
    Ok(modal_residues(alignment)?
        .into_iter()
        .map(|m| m.symbol)
        .collect())
}

/// Number of index steps between the ends of an HPD window over `n` sorted samples
fn hpd_span(n: usize, ci: f64) -> Result<usize> {
    if !(ci > 0.0 && ci < 1.0) {
        return Err(StatsError::InvalidInterval(format!(
            "ci must be strictly between 0 and 1, got {}",
            ci
        )));
    }

    // ceil(ci * n), but products like 0.1 * 30 land a few ulps above an integer
    let target = ci * n as f64;
    let nearest = target.round();
    let covered = (if (target - nearest).abs() <= 4.0 * f64::EPSILON * target {
        nearest
    } else {
        target.ceil()
    }) as usize;
    if covered < 2 {
        return Err(StatsError::InvalidInterval(format!(
            "{} samples are too few for a {} credible interval",
            n, ci
        )));
    }
    Ok(covered - 1)
}

/// Highest posterior density interval from posterior draws.
///
/// Sorts `samples` in place, then scans every window holding `ceil(ci * n)`
/// consecutive samples and returns the narrowest. The first narrowest window wins.
pub fn hpd_interval(samples: &mut [f64], ci: f64) -> Result<(f64, f64)> {
    let span = hpd_span(samples.len(), ci)?;
    samples.sort_unstable_by(f64::total_cmp);

    let mut best = 0;
    let mut best_width = f64::INFINITY;
    for start in 0..samples.len() - span {
        let width = samples[start + span] - samples[start];
        if width < best_width {
            best = start;
            best_width = width;
        }
    }

    Ok((samples[best], samples[best + span]))
}

/// Draw the posterior mass of category `index` under `Dirichlet(distribution)`.
///
/// A single Dirichlet component is marginally `Beta(α_k, Σα − α_k)`, so the
/// other 19 dimensions never need to be drawn.
pub fn sample_component_mass<R: Rng>(
    distribution: &Distribution,
    index: usize,
    n: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if index >= distribution.len() {
        return Err(StatsError::PositionOutOfRange {
            position: index,
            length: distribution.len(),
        });
    }

    let alpha = distribution[index];
    let rest: f64 = distribution
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, &a)| a)
        .sum();

    let beta = Beta::new(alpha, rest).map_err(|e| {
        StatsError::Sampling(format!(
            "invalid concentration ({}, {}): {}",
            alpha, rest, e
        ))
    })?;

    Ok((0..n).map(|_| beta.sample(rng)).collect())
}

/// Consensus estimation over every column of an alignment
#[derive(Debug, Clone, Default)]
pub struct ConsensusEstimator {
    pub config: ConsensusConfig,
}

impl ConsensusEstimator {
    pub fn new(config: ConsensusConfig) -> Self {
        Self { config }
    }

    /// Full-record projection: modal residue, its probability and HPD interval.
    ///
    /// The smoothed column distribution is used as Dirichlet concentration. One
    /// seed per column is drawn from `rng` up front, so a seeded generator gives
    /// the same records regardless of how rayon schedules the columns.
    pub fn estimate<R: Rng>(
        &self,
        alignment: &Alignment,
        rng: &mut R,
    ) -> Result<Vec<ConsensusRecord>> {
        hpd_span(self.config.samples, self.config.ci)?;

        let distributions = alignment_distributions(alignment, DistributionMode::Smoothed)?;
        let seeds: Vec<u64> = (0..distributions.len()).map(|_| rng.gen()).collect();

        let pb = self.progress_bar(distributions.len());
        let update_interval = std::cmp::max(1, distributions.len() / 100);
        let completed = AtomicUsize::new(0);

        let records = distributions
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(dist, &seed)| {
                let record = self.estimate_column(dist, seed);

                let count = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if count % update_interval == 0 {
                    pb.set_position(count as u64);
                }
                record
            })
            .collect::<Result<Vec<_>>>()?;

        pb.finish_with_message("✅ Consensus sampling completed");
        Ok(records)
    }

    /// Symbol-only projection, no sampling involved
    pub fn consensus_sequence(&self, alignment: &Alignment) -> Result<String> {
        consensus_sequence(alignment)
    }

    fn estimate_column(&self, distribution: &Distribution, seed: u64) -> Result<ConsensusRecord> {
        let modal = modal_residue(distribution);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut draws =
            sample_component_mass(distribution, modal.index, self.config.samples, &mut rng)?;
        let (lower, upper) = hpd_interval(&mut draws, self.config.ci)?;

        Ok(ConsensusRecord {
            symbol: modal.symbol,
            probability: modal.probability,
            lower,
            upper,
        })
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} columns ({percent}%) ETA: {eta}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
