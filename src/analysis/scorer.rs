use super::duo_stats::{StatTotals, TeammateAggregate};

/// Weights of the impact formula. One frozen set of constants; tuning is
/// an edit here, not a code change.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub kda: f64,
    pub damage: f64,
    pub gold: f64,
    pub vision: f64,
    pub objectives: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            kda: 0.30,
            damage: 0.25,
            gold: 0.20,
            vision: 0.10,
            objectives: 0.15,
        }
    }
}

/// Score-ratio cutoffs between verdict buckets, read top-down.
#[derive(Debug, Clone)]
pub struct Thresholds {
    pub boosted: f64,
    pub passenger: f64,
    pub balanced_floor: f64,
    pub carry_floor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            boosted: 1.40,
            passenger: 1.15,
            balanced_floor: 0.85,
            carry_floor: 0.60,
        }
    }
}

/// Who is carrying whom, from the subject's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The duo massively outperforms the subject.
    Boosted,
    /// The duo does the heavy lifting.
    Passenger,
    Balanced,
    /// The subject does the heavy lifting.
    Carry,
    /// The subject massively outperforms the duo.
    HardCarry,
}

impl Verdict {
    pub fn from_ratio(ratio: f64, thresholds: &Thresholds) -> Self {
        if ratio >= thresholds.boosted {
            Verdict::Boosted
        } else if ratio >= thresholds.passenger {
            Verdict::Passenger
        } else if ratio > thresholds.balanced_floor {
            Verdict::Balanced
        } else if ratio > thresholds.carry_floor {
            Verdict::Carry
        } else {
            Verdict::HardCarry
        }
    }
}

/// Per-minute-normalized line for one player over the shared games.
#[derive(Debug, Clone)]
pub struct PlayerScore {
    pub kda: f64,
    pub damage_per_min: f64,
    pub gold_per_min: f64,
    pub vision_per_min: f64,
    pub objective_damage_per_min: f64,
    pub impact: f64,
}

impl PlayerScore {
    fn compute(totals: &StatTotals, minutes: f64, weights: &ScoreWeights) -> Self {
        let minutes = minutes.max(1.0);
        let kda = totals.kda();
        let damage_per_min = totals.damage_to_champions as f64 / minutes;
        let gold_per_min = totals.gold_earned as f64 / minutes;
        let vision_per_min = totals.vision_score as f64 / minutes;
        let objective_damage_per_min = totals.damage_to_objectives as f64 / minutes;

        // Per-minute damage/gold/objective figures run in the hundreds;
        // divide by 100 so every term sits on a single-digit scale.
        let impact = weights.kda * kda
            + weights.damage * (damage_per_min / 100.0)
            + weights.gold * (gold_per_min / 100.0)
            + weights.vision * vision_per_min
            + weights.objectives * (objective_damage_per_min / 100.0);

        PlayerScore {
            kda,
            damage_per_min,
            gold_per_min,
            vision_per_min,
            objective_damage_per_min,
            impact,
        }
    }
}

/// The scored comparison handed to the display layer.
#[derive(Debug, Clone)]
pub struct DuoReport {
    pub subject: PlayerScore,
    pub duo: PlayerScore,
    pub ratio: f64,
    pub verdict: Verdict,
    pub winrate: f64,
}

pub fn score_duo(agg: &TeammateAggregate, weights: &ScoreWeights, thresholds: &Thresholds) -> DuoReport {
    let subject = PlayerScore::compute(&agg.subject, agg.minutes, weights);
    let duo = PlayerScore::compute(&agg.own, agg.minutes, weights);

    let ratio = duo.impact / subject.impact.max(0.01);
    let verdict = Verdict::from_ratio(ratio, thresholds);

    DuoReport {
        subject,
        duo,
        ratio,
        verdict,
        winrate: agg.winrate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::duo_stats::DuoTracker;
    use crate::api::models::{MatchDto, MatchInfo, MatchMetadata, ParticipantDto};

    struct Line {
        kills: i32,
        deaths: i32,
        assists: i32,
        damage: i64,
        gold: i64,
        vision: i64,
        objectives: i64,
    }

    fn participant(puuid: &str, name: &str, win: bool, line: &Line) -> ParticipantDto {
        ParticipantDto {
            puuid: puuid.to_string(),
            champion_name: "Thresh".to_string(),
            team_id: 100,
            win,
            kills: line.kills,
            deaths: line.deaths,
            assists: line.assists,
            total_damage_dealt_to_champions: line.damage,
            gold_earned: line.gold,
            vision_score: line.vision,
            damage_dealt_to_objectives: line.objectives,
            riot_id_game_name: name.to_string(),
            riot_id_tag_line: "TST".to_string(),
            summoner_name: String::new(),
        }
    }

    fn shared_game(id: &str, mine: &Line, duos: &Line, win: bool) -> MatchDto {
        MatchDto {
            metadata: MatchMetadata {
                match_id: id.to_string(),
            },
            info: MatchInfo {
                game_duration: 1800,
                game_creation: 0,
                queue_id: 420,
                participants: vec![
                    participant("me", "Me", win, mine),
                    participant("duo", "Duo", win, duos),
                ],
            },
        }
    }

    fn solo_game(id: &str, mine: &Line) -> MatchDto {
        MatchDto {
            metadata: MatchMetadata {
                match_id: id.to_string(),
            },
            info: MatchInfo {
                game_duration: 1800,
                game_creation: 0,
                queue_id: 420,
                participants: vec![participant("me", "Me", true, mine)],
            },
        }
    }

    const WEAK: Line = Line {
        kills: 2,
        deaths: 5,
        assists: 3,
        damage: 10_000,
        gold: 8_000,
        vision: 15,
        objectives: 2_000,
    };

    const STRONG: Line = Line {
        kills: 10,
        deaths: 2,
        assists: 8,
        damage: 25_000,
        gold: 12_000,
        vision: 30,
        objectives: 8_000,
    };

    fn boosted_sample() -> Vec<MatchDto> {
        // Duo appears in 4 of 5 games, strictly better on every stat line.
        vec![
            shared_game("m1", &WEAK, &STRONG, true),
            shared_game("m2", &WEAK, &STRONG, true),
            shared_game("m3", &WEAK, &STRONG, false),
            shared_game("m4", &WEAK, &STRONG, true),
            solo_game("m5", &WEAK),
        ]
    }

    #[test]
    fn strictly_better_duo_classifies_subject_as_boosted() {
        let matches = boosted_sample();
        let tracker = DuoTracker::aggregate("me", &matches);
        let duo = tracker.best_duo(4).expect("4 shared games qualify");

        let report = score_duo(duo, &ScoreWeights::default(), &Thresholds::default());

        assert!(report.duo.impact > report.subject.impact);
        assert!(report.ratio >= Thresholds::default().boosted);
        assert_eq!(report.verdict, Verdict::Boosted);
    }

    #[test]
    fn identical_lines_are_balanced() {
        let matches = vec![
            shared_game("m1", &WEAK, &WEAK, true),
            shared_game("m2", &WEAK, &WEAK, false),
            shared_game("m3", &WEAK, &WEAK, true),
            shared_game("m4", &WEAK, &WEAK, true),
        ];
        let tracker = DuoTracker::aggregate("me", &matches);
        let duo = tracker.best_duo(4).expect("duo");
        let report = score_duo(duo, &ScoreWeights::default(), &Thresholds::default());

        assert!((report.ratio - 1.0).abs() < 1e-9);
        assert_eq!(report.verdict, Verdict::Balanced);
    }

    #[test]
    fn scoring_is_deterministic_over_a_frozen_sample() {
        let matches = boosted_sample();
        let weights = ScoreWeights::default();
        let thresholds = Thresholds::default();

        let first = {
            let tracker = DuoTracker::aggregate("me", &matches);
            score_duo(tracker.best_duo(4).unwrap(), &weights, &thresholds)
        };
        let second = {
            let tracker = DuoTracker::aggregate("me", &matches);
            score_duo(tracker.best_duo(4).unwrap(), &weights, &thresholds)
        };

        assert_eq!(first.subject.impact.to_bits(), second.subject.impact.to_bits());
        assert_eq!(first.duo.impact.to_bits(), second.duo.impact.to_bits());
        assert_eq!(first.verdict, second.verdict);
    }

    #[test]
    fn ratio_buckets_cover_all_five_verdicts() {
        let t = Thresholds::default();
        assert_eq!(Verdict::from_ratio(1.40, &t), Verdict::Boosted);
        assert_eq!(Verdict::from_ratio(1.20, &t), Verdict::Passenger);
        assert_eq!(Verdict::from_ratio(1.00, &t), Verdict::Balanced);
        assert_eq!(Verdict::from_ratio(0.70, &t), Verdict::Carry);
        assert_eq!(Verdict::from_ratio(0.50, &t), Verdict::HardCarry);
    }

    #[test]
    fn deathless_totals_do_not_divide_by_zero() {
        let perfect = Line {
            deaths: 0,
            ..WEAK
        };
        let matches = vec![
            shared_game("m1", &perfect, &perfect, true),
            shared_game("m2", &perfect, &perfect, true),
        ];
        let tracker = DuoTracker::aggregate("me", &matches);
        let duo = tracker.best_duo(2).expect("duo");
        let report = score_duo(duo, &ScoreWeights::default(), &Thresholds::default());

        assert!(report.subject.kda.is_finite());
        assert_eq!(report.verdict, Verdict::Balanced);
    }
}
