use serde::Deserialize;

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Match V5 response
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchInfo {
    /// Seconds for modern match-v5 documents.
    pub game_duration: i64,
    /// Unix millis when the game was created.
    #[serde(default)]
    pub game_creation: i64,
    #[serde(default)]
    pub queue_id: i32,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_name: String,
    pub team_id: i32,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub total_damage_dealt_to_champions: i64,
    pub gold_earned: i64,
    #[serde(default)]
    pub vision_score: i64,
    #[serde(default)]
    pub damage_dealt_to_objectives: i64,
    // Identity fields; older documents only carry summonerName.
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(default)]
    pub riot_id_tag_line: String,
    #[serde(default)]
    pub summoner_name: String,
}

impl ParticipantDto {
    /// Display identity, preferring the modern Riot ID over the legacy
    /// summoner name.
    pub fn identity(&self) -> String {
        if !self.riot_id_game_name.is_empty() {
            if self.riot_id_tag_line.is_empty() {
                self.riot_id_game_name.clone()
            } else {
                format!("{}#{}", self.riot_id_game_name, self.riot_id_tag_line)
            }
        } else if !self.summoner_name.is_empty() {
            self.summoner_name.clone()
        } else {
            "Unknown".to_string()
        }
    }
}
