use crate::errors::{ConfigError, EngineError};
use crate::policies::{ArmStatistics, ArmStats, Policy, PolicyType};

/// Arm statistics plus the policy that reads them.
pub struct BanditEngine {
    statistics: ArmStatistics,
    policy: Box<dyn Policy + Send>,
}

impl BanditEngine {
    pub fn new(policy_type: PolicyType) -> Result<Self, ConfigError> {
        let statistics = ArmStatistics::new(policy_type.n_arms());
        let policy = policy_type.into_inner()?;

        Ok(Self { statistics, policy })
    }

    pub fn policy_type(&self) -> PolicyType {
        self.policy.policy_type()
    }

    pub fn statistics(&self) -> &ArmStatistics {
        &self.statistics
    }

    pub fn stats(&self) -> Vec<ArmStats> {
        self.statistics.stats()
    }

    pub fn select_round(&mut self) -> Vec<usize> {
        self.policy.select(&self.statistics)
    }

    /// Record every `(arm, reward)` pair, or none of them.
    pub fn apply_rewards(&mut self, arms: &[usize], rewards: &[f64]) -> Result<(), EngineError> {
        if arms.len() != rewards.len() {
            return Err(EngineError::ShapeMismatch {
                arms: arms.len(),
                rewards: rewards.len(),
            });
        }

        arms.iter()
            .zip(rewards)
            .try_for_each(|(&arm_id, &reward)| self.statistics.check(arm_id, reward))?;

        arms.iter()
            .zip(rewards)
            .try_for_each(|(&arm_id, &reward)| self.statistics.record(arm_id, reward))
            .map_err(EngineError::from)
    }
}
