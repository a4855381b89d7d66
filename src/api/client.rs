use crate::config::{Config, Queue};
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::*;

const USER_AGENT: &str = "duo_detect/0.1.0";

pub struct RiotApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        // Dev keys allow 20 req/sec; the limiter is shared across fetch workers.
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(20).unwrap()));
        RiotApiClient {
            config,
            rate_limiter,
        }
    }

    fn routing(&self) -> &'static str {
        self.config.region.routing()
    }

    fn wait_for_slot(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(25));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        self.wait_for_slot();

        let mut retried = false;

        loop {
            let response = ureq::get(url)
                .set("User-Agent", USER_AGENT)
                .call();

            match response {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(403, _)) => {
                    return Err(AppError::ApiKeyRejected);
                }
                Err(ureq::Error::Status(404, _)) => {
                    return Err(AppError::NotFound);
                }
                Err(ureq::Error::Status(429, _)) => {
                    // One retry after a fixed pause, then give up.
                    if retried {
                        return Err(AppError::RateLimited);
                    }
                    thread::sleep(Duration::from_millis(2000));
                    retried = true;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        let url = endpoints::account_by_riot_id(
            self.routing(),
            game_name,
            tag_line,
            &self.config.api_key,
        );

        let body = match self.execute_request(&url) {
            Ok(body) => body,
            Err(AppError::NotFound) => {
                return Err(AppError::PlayerNotFound(format!("{}#{}", game_name, tag_line)))
            }
            Err(e) => return Err(e),
        };

        serde_json::from_str(&body).map_err(|_| {
            AppError::PlayerNotFound(format!("{}#{}", game_name, tag_line))
        })
    }

    pub fn get_match_ids(
        &self,
        puuid: &str,
        queue: Queue,
        count: usize,
    ) -> Result<Vec<String>, AppError> {
        let url = endpoints::match_ids_by_puuid(
            self.routing(),
            puuid,
            queue.queue_id(),
            count,
            &self.config.api_key,
        );

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }

    pub fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = endpoints::match_by_id(self.routing(), match_id, &self.config.api_key);

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }
}
