use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArmError {
    #[error("Arm {arm_id} out of range for {arm_count} arms")]
    InvalidArm { arm_id: usize, arm_count: usize },
    #[error("Reward {reward} for arm {arm_id} is not finite")]
    NonFiniteReward { arm_id: usize, reward: f64 },
}

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Arm(#[from] ArmError),
    #[error("Got {rewards} rewards for {arms} arms")]
    ShapeMismatch { arms: usize, rewards: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown policy {0}, expected one of [epsilon_greedy, ucb]")]
    UnknownPolicy(String),
    #[error("Missing configuration section bandits.{0}")]
    MissingSection(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

/// Reasons a round got no rewards. Transient, the loop skips the round.
#[derive(Debug, Error, PartialEq)]
pub enum RewardUnavailable {
    #[error("Reward source timed out")]
    Timeout,
    #[error("Reward source not reachable: {0}")]
    Transport(String),
    #[error("Reward source answered with status {0}")]
    Status(u16),
    #[error("Malformed reward response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Widget {0} has no preferences")]
    UnknownWidget(usize),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
