use crate::error::AppError;
use clap::ValueEnum;
use std::env;

/// Platform shard the player's account lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Region {
    Euw1,
    Eun1,
    Tr1,
    Ru,
    Na1,
    Br1,
    La1,
    La2,
    Kr,
    Jp1,
    Oc1,
}

impl Region {
    /// Regional routing host used by account-v1 and match-v5.
    pub fn routing(&self) -> &'static str {
        match self {
            Region::Euw1 | Region::Eun1 | Region::Tr1 | Region::Ru => "europe",
            Region::Na1 | Region::Br1 | Region::La1 | Region::La2 => "americas",
            Region::Kr | Region::Jp1 => "asia",
            Region::Oc1 => "sea",
        }
    }

    pub fn shard(&self) -> &'static str {
        match self {
            Region::Euw1 => "euw1",
            Region::Eun1 => "eun1",
            Region::Tr1 => "tr1",
            Region::Ru => "ru",
            Region::Na1 => "na1",
            Region::Br1 => "br1",
            Region::La1 => "la1",
            Region::La2 => "la2",
            Region::Kr => "kr",
            Region::Jp1 => "jp1",
            Region::Oc1 => "oc1",
        }
    }
}

/// Queue sampled for the analysis, mapped to Riot queue IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Queue {
    /// Ranked Solo/Duo
    Solo,
    /// Ranked Flex
    Flex,
    /// ARAM
    Aram,
}

impl Queue {
    pub fn queue_id(&self) -> u16 {
        match self {
            Queue::Solo => 420,
            Queue::Flex => 440,
            Queue::Aram => 450,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Queue::Solo => "Ranked Solo/Duo",
            Queue::Flex => "Ranked Flex",
            Queue::Aram => "ARAM",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in environment or .env file".to_string(),
            )
        })?;

        let region = match env::var("RIOT_REGION") {
            Ok(value) => Region::from_str(&value, true).map_err(|_| {
                AppError::ConfigError(format!("unknown RIOT_REGION '{}'", value))
            })?,
            Err(_) => Region::Euw1,
        };

        Ok(Config { api_key, region })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shard_codes_route_to_their_continent() {
        assert_eq!(Region::Euw1.routing(), "europe");
        assert_eq!(Region::Na1.routing(), "americas");
        assert_eq!(Region::Kr.routing(), "asia");
        assert_eq!(Region::Oc1.routing(), "sea");
    }

    #[test]
    fn queues_map_to_riot_ids() {
        assert_eq!(Queue::Solo.queue_id(), 420);
        assert_eq!(Queue::Flex.queue_id(), 440);
        assert_eq!(Queue::Aram.queue_id(), 450);
    }
}
