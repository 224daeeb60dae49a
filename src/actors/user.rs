use crate::config::WidgetPreference;
use crate::errors::{ConfigError, SimulationError};
use crate::policies::rng::MaybeSeededRng;

use actix::prelude::*;
use rand_distr::{Distribution, LogNormal};
use std::collections::HashMap;
use tracing::info;

/// Simulated user: time spent on a widget is log-normal with per-widget parameters.
pub struct User {
    preferences: HashMap<usize, LogNormal<f64>>,
    rng: MaybeSeededRng,
}

impl User {
    pub fn new(
        preferences: &HashMap<String, WidgetPreference>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let preferences = preferences
            .iter()
            .map(|(key, preference)| {
                let widget_id = key.parse::<usize>().map_err(|_| {
                    ConfigError::Invalid(format!("preference key {key} is not a widget id"))
                })?;
                if !preference.mean.is_finite() {
                    return Err(ConfigError::Invalid(format!(
                        "mean of widget {widget_id} must be finite"
                    )));
                }
                if !(preference.sigma.is_finite() && preference.sigma >= 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "sigma of widget {widget_id} must be finite and non-negative, got {}",
                        preference.sigma
                    )));
                }
                let distribution =
                    LogNormal::new(preference.mean, preference.sigma).map_err(|err| {
                        ConfigError::Invalid(format!("preference of widget {widget_id}: {err}"))
                    })?;
                Ok((widget_id, distribution))
            })
            .collect::<Result<HashMap<_, _>, ConfigError>>()?;

        Ok(Self {
            preferences,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn watch(&mut self, widgets: &[usize]) -> Result<Vec<f64>, SimulationError> {
        let distributions = widgets
            .iter()
            .map(|widget_id| {
                self.preferences
                    .get(widget_id)
                    .ok_or(SimulationError::UnknownWidget(*widget_id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(distributions
            .into_iter()
            .map(|distribution| distribution.sample(self.rng.get_rng()))
            .collect())
    }
}

impl Actor for User {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!(widgets = %self.preferences.len(), "Starting simulated user");
    }
}

// Messages
#[derive(Message)]
#[rtype(result = "Result<Vec<f64>, SimulationError>")]
pub struct Watch {
    pub widgets: Vec<usize>,
}

impl Handler<Watch> for User {
    type Result = Result<Vec<f64>, SimulationError>;

    fn handle(&mut self, msg: Watch, _: &mut Self::Context) -> Self::Result {
        self.watch(&msg.widgets)
    }
}
