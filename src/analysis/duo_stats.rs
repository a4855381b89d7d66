use crate::api::models::{MatchDto, ParticipantDto};
use std::collections::HashMap;

/// Running sums of the stats the comparison cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTotals {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub damage_to_champions: u64,
    pub gold_earned: u64,
    pub vision_score: u64,
    pub damage_to_objectives: u64,
}

impl StatTotals {
    fn add(&mut self, p: &ParticipantDto) {
        self.kills += p.kills.max(0) as u32;
        self.deaths += p.deaths.max(0) as u32;
        self.assists += p.assists.max(0) as u32;
        self.damage_to_champions += p.total_damage_dealt_to_champions.max(0) as u64;
        self.gold_earned += p.gold_earned.max(0) as u64;
        self.vision_score += p.vision_score.max(0) as u64;
        self.damage_to_objectives += p.damage_dealt_to_objectives.max(0) as u64;
    }

    /// (Kills + Assists) / Deaths, deaths clamped to 1 like the usual
    /// "perfect KDA" convention.
    pub fn kda(&self) -> f64 {
        (self.kills + self.assists) as f64 / self.deaths.max(1) as f64
    }
}

/// Everything accumulated about one teammate across the sampled matches.
///
/// `subject` holds the subject player's own sums restricted to the games
/// shared with this teammate, so the comparison is pairwise over the same
/// games rather than over two different samples.
#[derive(Debug, Clone, PartialEq)]
pub struct TeammateAggregate {
    pub identity: String,
    pub games: usize,
    pub wins: usize,
    /// Summed duration of the shared games, in minutes.
    pub minutes: f64,
    pub own: StatTotals,
    pub subject: StatTotals,
    pub champions: Vec<String>,
}

impl TeammateAggregate {
    fn new(identity: String) -> Self {
        TeammateAggregate {
            identity,
            games: 0,
            wins: 0,
            minutes: 0.0,
            own: StatTotals::default(),
            subject: StatTotals::default(),
            champions: Vec::new(),
        }
    }

    pub fn winrate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Champion → times played, insertion-ordered by first appearance.
    pub fn champion_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for champ in &self.champions {
            match counts.iter_mut().find(|(name, _)| name == champ) {
                Some((_, n)) => *n += 1,
                None => counts.push((champ.clone(), 1)),
            }
        }
        counts
    }
}

/// Per-request accumulator keyed by teammate identity.
pub struct DuoTracker {
    teammates: HashMap<String, TeammateAggregate>,
    matches_seen: usize,
}

impl DuoTracker {
    pub fn new() -> Self {
        DuoTracker {
            teammates: HashMap::new(),
            matches_seen: 0,
        }
    }

    /// Build a tracker over a full match sample.
    pub fn aggregate(subject_puuid: &str, matches: &[MatchDto]) -> Self {
        let mut tracker = DuoTracker::new();
        for m in matches {
            tracker.add_match(subject_puuid, m);
        }
        tracker
    }

    /// Fold one match into the accumulator. A match the subject does not
    /// appear in is ignored.
    pub fn add_match(&mut self, subject_puuid: &str, m: &MatchDto) {
        let subject = match m
            .info
            .participants
            .iter()
            .find(|p| p.puuid == subject_puuid)
        {
            Some(p) => p,
            None => return,
        };

        self.matches_seen += 1;
        let minutes = (m.info.game_duration as f64 / 60.0).max(1.0);

        for p in &m.info.participants {
            if p.team_id != subject.team_id || p.puuid == subject_puuid {
                continue;
            }

            let identity = p.identity();
            let entry = self
                .teammates
                .entry(identity.clone())
                .or_insert_with(|| TeammateAggregate::new(identity));

            entry.games += 1;
            if p.win {
                entry.wins += 1;
            }
            entry.minutes += minutes;
            entry.own.add(p);
            entry.subject.add(subject);
            entry.champions.push(p.champion_name.clone());
        }
    }

    pub fn matches_seen(&self) -> usize {
        self.matches_seen
    }

    /// The teammate with the highest co-occurrence count, if any crosses
    /// the threshold. Ties break on identity so repeated runs agree.
    pub fn best_duo(&self, min_games: usize) -> Option<&TeammateAggregate> {
        self.teammates
            .values()
            .max_by(|a, b| {
                a.games
                    .cmp(&b.games)
                    .then_with(|| b.identity.cmp(&a.identity))
            })
            .filter(|best| best.games >= min_games.max(1))
    }
}
