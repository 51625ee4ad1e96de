use crate::domain::model::{Hero, SquadRecord, TRIO_SIZE};
use crate::domain::services::leader::rank_leaders;
use crate::domain::services::pool::build_candidate_pool;
use crate::domain::services::score::score_squad;
use std::collections::HashSet;

/// Greedy squad assembly over the whole roster.
///
/// Leaders are consumed in ranked order exactly once; a leader already swept
/// into an earlier squad is skipped, and a leader whose candidate pool holds
/// fewer than three heroes produces no squad while its candidates stay
/// available to later leaders. Committed squads never share a member.
/// Processed leaders are never revisited even when later commits would free
/// better candidates.
pub fn assemble_squads(roster: &[Hero], threshold: i64, pool_size: usize) -> Vec<SquadRecord> {
    let mut used: HashSet<String> = HashSet::new();
    let mut squads = Vec::new();

    for leader in rank_leaders(roster, threshold) {
        if used.contains(&leader.name) {
            continue;
        }

        let pool = build_candidate_pool(leader, roster, &used, pool_size);
        let Some((score, trio)) = best_trio(leader, &pool) else {
            tracing::debug!(leader = %leader.name, pool = pool.len(), "pool too small, leader skipped");
            continue;
        };

        used.insert(leader.name.clone());
        let mut names = Vec::with_capacity(1 + TRIO_SIZE);
        names.push(leader.name.clone());
        for member in trio {
            used.insert(member.name.clone());
            names.push(member.name.clone());
        }

        tracing::debug!(leader = %leader.name, score, "squad committed");
        squads.push(SquadRecord {
            leader: leader.name.clone(),
            score,
            squad: names,
        });
    }

    squads
}

/// Exhaustive choose-3 search over the ranked pool. Enumeration follows pool
/// order (i < j < k), and only a strictly higher score displaces the current
/// best, so the first-seen trio wins ties.
fn best_trio<'a>(leader: &Hero, pool: &[&'a Hero]) -> Option<(u64, [&'a Hero; TRIO_SIZE])> {
    let mut best: Option<(u64, [&Hero; TRIO_SIZE])> = None;

    for i in 0..pool.len() {
        for j in i + 1..pool.len() {
            for k in j + 1..pool.len() {
                let trio = [pool[i], pool[j], pool[k]];
                let score = score_squad(leader, &trio);
                if best.as_ref().map_or(true, |(top, _)| score > *top) {
                    best = Some((score, trio));
                }
            }
        }
    }

    best
}
