use crate::api::client::RiotApiClient;
use crate::api::models::MatchDto;
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Fixed worker pool size; Riot match fetches are I/O bound and the
/// client's limiter paces the shared quota.
const WORKER_COUNT: usize = 8;

pub struct FetchOutcome {
    pub matches: Vec<MatchDto>,
    pub failed: usize,
}

/// Fetch match details across a bounded thread pool.
///
/// Best-effort: a match that fails to fetch or parse is skipped and only
/// shrinks the sample. Completion order is irrelevant downstream since
/// aggregation is commutative.
pub fn fetch_matches(client: &RiotApiClient, match_ids: &[String]) -> FetchOutcome {
    let pb = ProgressBar::new(match_ids.len() as u64);
    pb.set_message("Fetching match details");

    let cursor = AtomicUsize::new(0);
    let fetched: Mutex<Vec<MatchDto>> = Mutex::new(Vec::with_capacity(match_ids.len()));
    let failed = AtomicUsize::new(0);

    let workers = WORKER_COUNT.min(match_ids.len().max(1));

    thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| loop {
                let idx = cursor.fetch_add(1, Ordering::Relaxed);
                if idx >= match_ids.len() {
                    break;
                }

                match client.get_match(&match_ids[idx]) {
                    Ok(m) => fetched.lock().unwrap().push(m),
                    Err(_) => {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }

                pb.inc(1);
            });
        }
    });

    pb.finish_with_message("✓ Match data fetched");

    FetchOutcome {
        matches: fetched.into_inner().unwrap(),
        failed: failed.into_inner(),
    }
}
