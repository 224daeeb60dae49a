use crate::errors::ArmError;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ArmStats {
    pub pulls: u64,
    pub mean_reward: f64,
}

/// Pull counts and running mean rewards for a fixed set of arms.
///
/// The arm count is set once; every mutation goes through [`ArmStatistics::record`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArmStatistics {
    pulls: Vec<u64>,
    estimates: Vec<f64>,
}

impl ArmStatistics {
    pub fn new(arm_count: usize) -> Self {
        Self {
            pulls: vec![0; arm_count],
            estimates: vec![0.0; arm_count],
        }
    }

    pub fn arm_count(&self) -> usize {
        self.pulls.len()
    }

    pub fn pulls(&self) -> &[u64] {
        &self.pulls
    }

    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    pub fn total_pulls(&self) -> u64 {
        self.pulls.iter().sum()
    }

    pub(crate) fn check(&self, arm_id: usize, reward: f64) -> Result<(), ArmError> {
        if arm_id >= self.arm_count() {
            return Err(ArmError::InvalidArm {
                arm_id,
                arm_count: self.arm_count(),
            });
        }
        if !reward.is_finite() {
            return Err(ArmError::NonFiniteReward { arm_id, reward });
        }
        Ok(())
    }

    /// Count one observation and fold it into the running mean.
    ///
    /// The mean is updated with the post-increment count, so the first reward
    /// of an arm becomes its estimate exactly.
    pub fn record(&mut self, arm_id: usize, reward: f64) -> Result<(), ArmError> {
        self.check(arm_id, reward)?;

        self.pulls[arm_id] += 1;
        let estimate = &mut self.estimates[arm_id];
        *estimate += (reward - *estimate) / (self.pulls[arm_id] as f64);

        Ok(())
    }

    pub fn stats(&self) -> Vec<ArmStats> {
        self.pulls
            .iter()
            .zip(&self.estimates)
            .map(|(&pulls, &mean_reward)| ArmStats { pulls, mean_reward })
            .collect()
    }
}
