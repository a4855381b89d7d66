use crate::analysis::duo_stats::TeammateAggregate;
use crate::analysis::scorer::{DuoReport, Verdict};
use chrono::{DateTime, Utc};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    stat: String,
    you: String,
    duo: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Header line for the sample: how much of the requested window survived
/// fetching, and when it was played.
pub fn display_scan_summary(
    analyzed: usize,
    requested: usize,
    queue_label: &str,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
) {
    println!(
        "\n{}",
        format!("📊 SCANNED {} OF {} {} GAMES", analyzed, requested, queue_label.to_uppercase())
            .bold()
            .cyan()
    );
    println!("{}", "=".repeat(60).cyan());
    if let Some((oldest, newest)) = window {
        println!(
            "   Window: {} → {}",
            oldest.format("%Y-%m-%d"),
            newest.format("%Y-%m-%d")
        );
    }
    println!();
}

pub fn display_solo_player(min_games: usize, analyzed: usize) {
    println!("\n{}", "🟢 SOLO PLAYER".bold().green());
    println!("{}\n", "=".repeat(60).green());
    println!(
        "No teammate appeared {} or more times in the last {} games.",
        min_games, analyzed
    );
    println!("Nobody is boosting this player. Nobody is being boosted.\n");
}

pub fn display_duo_report(subject_name: &str, agg: &TeammateAggregate, report: &DuoReport) {
    println!(
        "\n{}",
        format!("🚨 SUSPECT DUO: {} 🚨", agg.identity).bold().red()
    );
    println!("{}\n", "=".repeat(60).red());
    println!(
        "Seen {} times in the sample. Winrate together: {}",
        agg.games.to_string().bold(),
        format!("{:.0}%", report.winrate * 100.0).bold()
    );

    let rows = vec![
        StatRow {
            stat: "KDA".to_string(),
            you: format!("{:.2}", report.subject.kda),
            duo: format!("{:.2}", report.duo.kda),
        },
        StatRow {
            stat: "Damage / min".to_string(),
            you: format!("{:.0}", report.subject.damage_per_min),
            duo: format!("{:.0}", report.duo.damage_per_min),
        },
        StatRow {
            stat: "Gold / min".to_string(),
            you: format!("{:.0}", report.subject.gold_per_min),
            duo: format!("{:.0}", report.duo.gold_per_min),
        },
        StatRow {
            stat: "Vision / min".to_string(),
            you: format!("{:.2}", report.subject.vision_per_min),
            duo: format!("{:.2}", report.duo.vision_per_min),
        },
        StatRow {
            stat: "Objective dmg / min".to_string(),
            you: format!("{:.0}", report.subject.objective_damage_per_min),
            duo: format!("{:.0}", report.duo.objective_damage_per_min),
        },
        StatRow {
            stat: "Impact score".to_string(),
            you: format!("{:.2}", report.subject.impact),
            duo: format!("{:.2}", report.duo.impact),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("\n{}", table);

    let champs = agg
        .champion_counts()
        .into_iter()
        .map(|(name, n)| if n > 1 { format!("{} ×{}", name, n) } else { name })
        .collect::<Vec<_>>()
        .join(", ");
    println!("\n{} played: {}", agg.identity.bold(), champs);

    println!(
        "\nImpact ratio (duo / {}): {}",
        subject_name,
        format!("{:.2}", report.ratio).bold()
    );

    display_verdict(report);
}

fn display_verdict(report: &DuoReport) {
    match report.verdict {
        Verdict::Boosted => {
            println!(
                "\n{}",
                "VERDICT: 100% BOOSTED. The duo outclasses you in your shared games."
                    .red()
                    .bold()
            );
        }
        Verdict::Passenger => {
            println!(
                "\n{}",
                "VERDICT: Passenger seat. Your duo does the heavy lifting.".yellow().bold()
            );
        }
        Verdict::Balanced => {
            if report.winrate < 0.5 {
                println!(
                    "\n{}",
                    "VERDICT: It's a real duo, but you lose together.".yellow().bold()
                );
            } else {
                println!(
                    "\n{}",
                    "VERDICT: Legit duo. Both of you pull your weight.".green().bold()
                );
            }
        }
        Verdict::Carry => {
            println!(
                "\n{}",
                "VERDICT: You carry this duo more often than not.".green().bold()
            );
        }
        Verdict::HardCarry => {
            println!(
                "\n{}",
                "VERDICT: YOU are the booster here.".green().bold()
            );
        }
    }
    println!();
}
