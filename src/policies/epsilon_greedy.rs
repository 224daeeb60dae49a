use super::arm::ArmStatistics;
use super::policy::{top_k, Policy, PolicyType};
use super::rng::MaybeSeededRng;

use rand::{seq::index, Rng};

/// Round-level epsilon-greedy: one coin flip decides whether the whole round
/// explores or exploits.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    n_arms: usize,
    n_picks: usize,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(n_arms: usize, n_picks: usize, epsilon: f64, seed: Option<u64>) -> Self {
        Self {
            n_arms,
            n_picks,
            epsilon,
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Policy for EpsilonGreedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::EpsilonGreedy {
            n_arms: self.n_arms,
            n_picks: self.n_picks,
            epsilon: self.epsilon,
            seed: self.rng.seed,
        }
    }

    fn select(&mut self, statistics: &ArmStatistics) -> Vec<usize> {
        let n_arms = statistics.arm_count();
        let n_picks = self.n_picks.min(n_arms);

        if self.rng.get_rng().random::<f64>() < self.epsilon {
            index::sample(self.rng.get_rng(), n_arms, n_picks).into_vec()
        } else {
            top_k(statistics.estimates(), n_picks)
        }
    }
}
