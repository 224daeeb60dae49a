use crate::api::requests::WatchPayload;
use crate::api::responses::WatchResponse;
use crate::config::AgentConfig;
use crate::errors::{ConfigError, RewardUnavailable};

use reqwest::{Client, Url};
use tracing::debug;

/// Anything that can score a set of arms, positionally aligned with the request.
///
/// Implementations never fail past this boundary: every transport problem is
/// reported as [`RewardUnavailable`].
#[allow(async_fn_in_trait)]
pub trait RewardSource {
    async fn get_rewards(&self, arms: &[usize]) -> Result<Vec<f64>, RewardUnavailable>;
}

/// Asks the user service how long the user spent on each widget.
pub struct HttpRewardSource {
    client: Client,
    watch_url: Url,
}

impl HttpRewardSource {
    pub fn new(config: &AgentConfig) -> Result<Self, ConfigError> {
        if config.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_ms must be positive".into(),
            ));
        }

        let watch_url = Url::parse(&config.reward_url)
            .and_then(|mut url| {
                // join replaces the last segment unless the path ends with a slash
                if !url.path().ends_with('/') {
                    url.set_path(&format!("{}/", url.path()));
                }
                url.join("watch")
            })
            .map_err(|err| {
                ConfigError::Invalid(format!("reward_url {}: {err}", config.reward_url))
            })?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| ConfigError::Invalid(format!("HTTP client: {err}")))?;

        Ok(Self { client, watch_url })
    }

    pub fn watch_url(&self) -> &Url {
        &self.watch_url
    }
}

fn unavailable(err: reqwest::Error) -> RewardUnavailable {
    if err.is_timeout() {
        RewardUnavailable::Timeout
    } else {
        RewardUnavailable::Transport(err.to_string())
    }
}

impl RewardSource for HttpRewardSource {
    async fn get_rewards(&self, arms: &[usize]) -> Result<Vec<f64>, RewardUnavailable> {
        debug!(url = %self.watch_url, arms = ?arms, "Requesting rewards");
        let response = self
            .client
            .get(self.watch_url.clone())
            .json(&WatchPayload {
                widgets: arms.to_vec(),
            })
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RewardUnavailable::Status(status.as_u16()));
        }

        let WatchResponse { timespent } = response.json().await.map_err(|err| {
            if err.is_timeout() {
                RewardUnavailable::Timeout
            } else {
                RewardUnavailable::Malformed(err.to_string())
            }
        })?;

        if timespent.len() != arms.len() {
            return Err(RewardUnavailable::Malformed(format!(
                "expected {} rewards, got {}",
                arms.len(),
                timespent.len()
            )));
        }
        Ok(timespent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::accountant::Accountant;
    use crate::actors::user::User;
    use crate::api::routes::user_service;
    use crate::config::WidgetPreference;

    use actix::Actor;
    use actix_web::{web::Data, App, HttpServer};
    use std::collections::HashMap;

    fn make_config(reward_url: &str) -> AgentConfig {
        AgentConfig {
            reward_url: reward_url.to_string(),
            request_timeout_ms: 1000,
            round_delay_ms: 0,
            seed: None,
        }
    }

    #[test]
    fn watch_url() {
        let source = HttpRewardSource::new(&make_config("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(source.watch_url().as_str(), "http://127.0.0.1:8000/watch");

        let source = HttpRewardSource::new(&make_config("http://user_service:8000")).unwrap();
        assert_eq!(source.watch_url().as_str(), "http://user_service:8000/watch");

        let source = HttpRewardSource::new(&make_config("http://127.0.0.1:8000/api")).unwrap();
        assert_eq!(source.watch_url().as_str(), "http://127.0.0.1:8000/api/watch");
    }

    #[test]
    fn invalid_config() {
        assert!(HttpRewardSource::new(&make_config("not a url")).is_err());

        let mut config = make_config("http://127.0.0.1:8000/");
        config.request_timeout_ms = 0;
        assert!(HttpRewardSource::new(&config).is_err());
    }

    #[actix::test]
    async fn unreachable_host() {
        // nothing listens on the discard port
        let source = HttpRewardSource::new(&make_config("http://127.0.0.1:9/")).unwrap();
        assert!(matches!(
            source.get_rewards(&[0, 1]).await,
            Err(RewardUnavailable::Transport(_)) | Err(RewardUnavailable::Timeout)
        ));
    }

    #[actix::test]
    async fn rewards_from_user_service() {
        let preferences = HashMap::from([
            (
                "0".to_string(),
                WidgetPreference {
                    mean: 0.0,
                    sigma: 0.0,
                },
            ),
            (
                "1".to_string(),
                WidgetPreference {
                    mean: 1.0,
                    sigma: 0.0,
                },
            ),
        ]);
        let user = User::new(&preferences, None).unwrap().start();
        let accountant = Accountant::new().start();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(user.clone()))
                .app_data(Data::new(accountant.clone()))
                .configure(user_service)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind ephemeral port");
        let address = server.addrs()[0];
        let handle = server.run();
        let server_handle = handle.handle();
        actix::spawn(handle);

        let source =
            HttpRewardSource::new(&make_config(&format!("http://{address}/"))).unwrap();

        let rewards = source.get_rewards(&[1, 0]).await.expect("rewards");
        assert!((rewards[0] - std::f64::consts::E).abs() < 1e-12);
        assert_eq!(rewards[1], 1.0);

        assert_eq!(
            source.get_rewards(&[0, 7]).await,
            Err(RewardUnavailable::Status(400))
        );

        server_handle.stop(false).await;
    }
}
