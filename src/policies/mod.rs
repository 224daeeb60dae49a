pub mod arm;
pub mod epsilon_greedy;
mod policy;
pub mod rng;
pub mod ucb;

pub use arm::{ArmStatistics, ArmStats};
pub use policy::{Policy, PolicyType};
