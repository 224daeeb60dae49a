use super::arm::ArmStatistics;
use super::policy::{top_k, Policy, PolicyType};

/// Number of never-pulled arms served together while cold-starting.
pub const COLD_START_BATCH: usize = 3;

// keeps the bonus finite for arms without pulls
const EPS: f64 = 1e-10;

#[derive(Debug, Clone)]
pub struct Ucb {
    n_arms: usize,
    n_picks: usize,
}

impl Ucb {
    pub fn new(n_arms: usize, n_picks: usize) -> Self {
        Self { n_arms, n_picks }
    }

    fn cold_start(statistics: &ArmStatistics) -> Option<Vec<usize>> {
        let unpulled: Vec<usize> = statistics
            .pulls()
            .iter()
            .enumerate()
            .filter(|&(_, &pulls)| pulls == 0)
            .map(|(arm_id, _)| arm_id)
            .take(COLD_START_BATCH)
            .collect();

        (unpulled.len() == COLD_START_BATCH).then_some(unpulled)
    }

    /// `estimate + sqrt(2 ln(total) / pulls)`, with `ln(total)` taken as 0
    /// while at most one reward has been observed.
    pub fn scores(statistics: &ArmStatistics) -> Vec<f64> {
        let total_pulls = statistics.total_pulls();
        let log_total = if total_pulls <= 1 {
            0.0
        } else {
            (total_pulls as f64).ln()
        };

        statistics
            .estimates()
            .iter()
            .zip(statistics.pulls())
            .map(|(&estimate, &pulls)| {
                estimate + ((2.0 * log_total) / (pulls as f64 + EPS)).sqrt()
            })
            .collect()
    }
}

impl Policy for Ucb {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Ucb {
            n_arms: self.n_arms,
            n_picks: self.n_picks,
        }
    }

    fn select(&mut self, statistics: &ArmStatistics) -> Vec<usize> {
        if let Some(arms) = Self::cold_start(statistics) {
            return arms;
        }

        top_k(&Self::scores(statistics), self.n_picks)
    }
}
