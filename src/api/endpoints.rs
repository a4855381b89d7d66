// URL builders for the three Riot endpoints the pipeline consumes.
// The api_key rides as a query parameter, matching Riot's documented scheme.

pub fn account_by_riot_id(routing: &str, game_name: &str, tag_line: &str, api_key: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}?api_key={}",
        routing, game_name, tag_line, api_key
    )
}

pub fn match_ids_by_puuid(
    routing: &str,
    puuid: &str,
    queue_id: u16,
    count: usize,
    api_key: &str,
) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?queue={}&start=0&count={}&api_key={}",
        routing, puuid, queue_id, count, api_key
    )
}

pub fn match_by_id(routing: &str, match_id: &str, api_key: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}?api_key={}",
        routing, match_id, api_key
    )
}
