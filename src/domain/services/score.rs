use crate::domain::model::{Hero, PERFECT_LEADERSHIP, TRIO_SIZE};
use std::collections::HashSet;

/// Scores a full squad of the leader plus exactly three others.
///
/// Base 1 for forming a squad, +1 per distinct power tag present anywhere in
/// the squad, then one doubling per affinity mention of another current
/// member and one more doubling for a leader at exactly
/// [`PERFECT_LEADERSHIP`].
///
/// Affinity counting is directional and per-mention: a member listing the
/// same ally twice doubles twice, two members listing each other double
/// twice as well. A member listing its own name never counts.
pub fn score_squad(leader: &Hero, trio: &[&Hero; TRIO_SIZE]) -> u64 {
    let members = [leader, trio[0], trio[1], trio[2]];
    let member_names: [&str; 4] = members.map(|m| m.name.as_str());

    let powers: HashSet<&str> = members
        .iter()
        .flat_map(|m| m.powers.iter().map(String::as_str))
        .collect();

    let mut score = 1 + powers.len() as u64;

    for member in members {
        for ally in &member.affinities {
            if ally != &member.name && member_names.contains(&ally.as_str()) {
                score *= 2;
            }
        }
    }

    if leader.leadership_ability == PERFECT_LEADERSHIP {
        score *= 2;
    }

    score
}
