pub mod decision_loop;
pub mod reward_source;

pub use decision_loop::{DecisionLoop, RoundOutcome, RoundRecord};
pub use reward_source::{HttpRewardSource, RewardSource};
