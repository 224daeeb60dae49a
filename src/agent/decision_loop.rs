use super::reward_source::RewardSource;

use crate::engine::BanditEngine;
use crate::errors::{EngineError, RewardUnavailable};

use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub id: Uuid,
    pub round: u64,
    pub arms: Vec<usize>,
    pub rewards: Vec<f64>,
}

impl RoundRecord {
    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }
}

/// What became of a round. A skipped round left the statistics untouched.
#[derive(Debug, PartialEq)]
pub enum RoundOutcome {
    Completed(RoundRecord),
    Skipped {
        round: u64,
        arms: Vec<usize>,
        reason: RewardUnavailable,
    },
}

impl RoundOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, RoundOutcome::Skipped { .. })
    }
}

/// Select, ask for rewards, update; one round at a time.
pub struct DecisionLoop<R> {
    engine: BanditEngine,
    source: R,
    round_delay: Duration,
    rounds: u64,
}

impl<R: RewardSource> DecisionLoop<R> {
    pub fn new(engine: BanditEngine, source: R, round_delay: Duration) -> Self {
        Self {
            engine,
            source,
            round_delay,
            rounds: 0,
        }
    }

    pub fn engine(&self) -> &BanditEngine {
        &self.engine
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    async fn request_rewards(&self, arms: &[usize]) -> Result<Vec<f64>, RewardUnavailable> {
        let rewards = self.source.get_rewards(arms).await?;

        if rewards.len() != arms.len() {
            return Err(RewardUnavailable::Malformed(format!(
                "expected {} rewards, got {}",
                arms.len(),
                rewards.len()
            )));
        }
        if let Some(reward) = rewards.iter().find(|reward| !reward.is_finite()) {
            return Err(RewardUnavailable::Malformed(format!(
                "reward {reward} is not finite"
            )));
        }
        Ok(rewards)
    }

    /// Run a single round. Only engine invariant violations are errors, an
    /// unavailable reward source yields [`RoundOutcome::Skipped`].
    pub async fn run_round(&mut self) -> Result<RoundOutcome, EngineError> {
        self.rounds += 1;
        let round = self.rounds;
        let arms = self.engine.select_round();

        let rewards = match self.request_rewards(&arms).await {
            Ok(rewards) => rewards,
            Err(reason) => {
                warn!(round, arms = ?arms, reason = %reason, "Skipping round");
                return Ok(RoundOutcome::Skipped {
                    round,
                    arms,
                    reason,
                });
            }
        };

        self.engine.apply_rewards(&arms, &rewards)?;

        let record = RoundRecord {
            id: Uuid::new_v4(),
            round,
            arms,
            rewards,
        };
        info!(
            target: "rounds",
            id = %record.id,
            round,
            arms = ?record.arms,
            total_reward = record.total_reward(),
            "Round completed"
        );
        if let Ok(stats) = serde_json::to_string(&self.engine.stats()) {
            debug!(stats = %stats, "Arm statistics");
        }

        Ok(RoundOutcome::Completed(record))
    }

    /// Play rounds until the engine reports an invariant violation.
    pub async fn run(mut self) -> Result<(), EngineError> {
        info!(
            policy = ?self.engine.policy_type(),
            delay_ms = %self.round_delay.as_millis(),
            "Starting decision loop"
        );
        loop {
            self.run_round().await?;
            actix::clock::sleep(self.round_delay).await;
        }
    }
}
