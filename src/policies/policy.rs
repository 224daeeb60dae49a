use super::arm::ArmStatistics;
use super::epsilon_greedy::EpsilonGreedy;
use super::ucb::Ucb;

use crate::config::BanditsConfig;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub enum PolicyType {
    EpsilonGreedy {
        n_arms: usize,
        n_picks: usize,
        epsilon: f64,
        seed: Option<u64>,
    },
    Ucb {
        n_arms: usize,
        n_picks: usize,
    },
}

impl PolicyType {
    /// Resolve a policy name against the `bandits` configuration section.
    pub fn from_config(
        name: &str,
        bandits: &BanditsConfig,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let name = name.to_lowercase();
        let policy_type = match name.as_str() {
            "epsilon_greedy" => bandits
                .epsilon_greedy
                .as_ref()
                .map(|conf| PolicyType::EpsilonGreedy {
                    n_arms: conf.n_arms,
                    n_picks: conf.n_picks,
                    epsilon: conf.epsilon,
                    seed,
                }),
            "ucb" => bandits.ucb.as_ref().map(|conf| PolicyType::Ucb {
                n_arms: conf.n_arms,
                n_picks: conf.n_picks,
            }),
            _ => return Err(ConfigError::UnknownPolicy(name)),
        }
        .ok_or(ConfigError::MissingSection(name))?;

        policy_type.validate()?;
        Ok(policy_type)
    }

    pub fn n_arms(&self) -> usize {
        match *self {
            PolicyType::EpsilonGreedy { n_arms, .. } | PolicyType::Ucb { n_arms, .. } => n_arms,
        }
    }

    pub fn n_picks(&self) -> usize {
        match *self {
            PolicyType::EpsilonGreedy { n_picks, .. } | PolicyType::Ucb { n_picks, .. } => n_picks,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (n_arms, n_picks) = (self.n_arms(), self.n_picks());
        if n_arms == 0 {
            return Err(ConfigError::Invalid("n_arms must be positive".into()));
        }
        if n_picks == 0 || n_picks > n_arms {
            return Err(ConfigError::Invalid(format!(
                "n_picks must be in [1, {n_arms}], got {n_picks}"
            )));
        }
        if let PolicyType::EpsilonGreedy { epsilon, .. } = *self {
            if !(0.0..=1.0).contains(&epsilon) {
                return Err(ConfigError::Invalid(format!(
                    "epsilon must be in [0, 1], got {epsilon}"
                )));
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> Result<Box<dyn Policy + Send>, ConfigError> {
        self.validate()?;

        Ok(match self {
            PolicyType::EpsilonGreedy {
                n_arms,
                n_picks,
                epsilon,
                seed,
            } => Box::new(EpsilonGreedy::new(n_arms, n_picks, epsilon, seed)),
            PolicyType::Ucb { n_arms, n_picks } => Box::new(Ucb::new(n_arms, n_picks)),
        })
    }
}

/// Chooses the arms of a round from the current statistics.
///
/// Policies hold configuration and randomness only, learned state lives in
/// [`ArmStatistics`].
pub trait Policy: Send {
    fn policy_type(&self) -> PolicyType;
    fn select(&mut self, statistics: &ArmStatistics) -> Vec<usize>;
}

// stable sort, so equal scores keep ascending index order
pub(super) fn top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut arms: Vec<usize> = (0..scores.len()).collect();
    arms.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    arms.truncate(k);
    arms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EpsilonGreedyConfig, UcbConfig};

    fn bandits() -> BanditsConfig {
        BanditsConfig {
            epsilon_greedy: Some(EpsilonGreedyConfig {
                n_arms: 10,
                n_picks: 3,
                epsilon: 0.1,
            }),
            ucb: None,
        }
    }

    #[test]
    fn top_k_ties() {
        assert_eq!(top_k(&[1.0, 3.0, 3.0, 2.0, 3.0], 3), vec![1, 2, 4]);
        assert_eq!(top_k(&[0.0, 0.0, 0.0], 2), vec![0, 1]);
    }

    #[test]
    fn from_config() {
        let policy_type = PolicyType::from_config("Epsilon_Greedy", &bandits(), Some(7)).unwrap();
        assert_eq!(
            policy_type,
            PolicyType::EpsilonGreedy {
                n_arms: 10,
                n_picks: 3,
                epsilon: 0.1,
                seed: Some(7)
            }
        );
        assert_eq!(policy_type.into_inner().unwrap().policy_type().n_picks(), 3);
    }

    #[test]
    fn unknown_policy() {
        assert!(matches!(
            PolicyType::from_config("thompson", &bandits(), None),
            Err(ConfigError::UnknownPolicy(name)) if name == "thompson"
        ));
    }

    #[test]
    fn missing_section() {
        assert!(matches!(
            PolicyType::from_config("ucb", &bandits(), None),
            Err(ConfigError::MissingSection(name)) if name == "ucb"
        ));
    }

    #[test]
    fn invalid_parameters() {
        let mut config = BanditsConfig {
            epsilon_greedy: None,
            ucb: Some(UcbConfig {
                n_arms: 3,
                n_picks: 4,
            }),
        };
        assert!(matches!(
            PolicyType::from_config("ucb", &config, None),
            Err(ConfigError::Invalid(_))
        ));

        config.ucb = Some(UcbConfig {
            n_arms: 0,
            n_picks: 0,
        });
        assert!(PolicyType::from_config("ucb", &config, None).is_err());

        let epsilon_greedy = PolicyType::EpsilonGreedy {
            n_arms: 3,
            n_picks: 1,
            epsilon: 1.5,
            seed: None,
        };
        assert!(epsilon_greedy.into_inner().is_err());

        let epsilon_greedy = PolicyType::EpsilonGreedy {
            n_arms: 3,
            n_picks: 1,
            epsilon: f64::NAN,
            seed: None,
        };
        assert!(epsilon_greedy.validate().is_err());
    }
}
