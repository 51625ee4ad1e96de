use crate::domain::model::Hero;
use std::cmp::Reverse;
use std::collections::HashSet;

/// The bounded, ranked set of candidates considered for one leader's trio
/// search. Excludes the leader and every already-used name, ranks the rest
/// by: listed in the leader's affinities first, distinct power count
/// descending, then leadership ability ascending (a tie-break; ordinary
/// members are not ranked on strength), and truncates to `pool_size`.
/// Stable on roster order.
///
/// `used` is owned by the assembler; this function only reads it.
pub fn build_candidate_pool<'a>(
    leader: &Hero,
    roster: &'a [Hero],
    used: &HashSet<String>,
    pool_size: usize,
) -> Vec<&'a Hero> {
    let favored: HashSet<&str> = leader.affinities.iter().map(String::as_str).collect();

    let mut candidates: Vec<&Hero> = roster
        .iter()
        .filter(|hero| hero.name != leader.name && !used.contains(&hero.name))
        .collect();

    candidates.sort_by_cached_key(|hero| {
        (
            !favored.contains(hero.name.as_str()),
            Reverse(hero.distinct_power_count()),
            hero.leadership_ability,
        )
    });

    candidates.truncate(pool_size);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(name: &str, powers: &[&str], leadership: i64, affinities: &[&str]) -> Hero {
        Hero {
            name: name.to_string(),
            powers: powers.iter().map(|p| p.to_string()).collect(),
            leadership_ability: leadership,
            affinities: affinities.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn excludes_leader_and_used_names() {
        let leader = hero("Lead", &["a"], 9, &[]);
        let roster = vec![
            leader.clone(),
            hero("Used", &["b"], 2, &[]),
            hero("Free", &["c"], 2, &[]),
        ];
        let used: HashSet<String> = ["Used".to_string()].into_iter().collect();

        let pool = build_candidate_pool(&leader, &roster, &used, 30);
        let names: Vec<&str> = pool.iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, vec!["Free"]);
    }

    #[test]
    fn leader_affinities_rank_first() {
        let leader = hero("Lead", &[], 9, &["Chosen"]);
        let roster = vec![
            hero("Powerful", &["a", "b", "c"], 1, &[]),
            hero("Chosen", &["a"], 1, &[]),
        ];

        let pool = build_candidate_pool(&leader, &roster, &HashSet::new(), 30);
        let names: Vec<&str> = pool.iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, vec!["Chosen", "Powerful"]);
    }

    #[test]
    fn ranks_by_powers_desc_then_leadership_asc() {
        let leader = hero("Lead", &[], 9, &[]);
        let roster = vec![
            hero("strong-leader", &["a"], 8, &[]),
            hero("humble", &["a"], 1, &[]),
            hero("power-rich", &["a", "b"], 5, &[]),
        ];

        let pool = build_candidate_pool(&leader, &roster, &HashSet::new(), 30);
        let names: Vec<&str> = pool.iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, vec!["power-rich", "humble", "strong-leader"]);
    }

    #[test]
    fn truncates_to_pool_size() {
        let leader = hero("Lead", &[], 9, &[]);
        let roster: Vec<Hero> = (0..10)
            .map(|i| hero(&format!("h{}", i), &["a"], 1, &[]))
            .collect();

        let pool = build_candidate_pool(&leader, &roster, &HashSet::new(), 4);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn truncation_happens_after_ranking() {
        let leader = hero("Lead", &[], 9, &["Pet"]);
        let roster = vec![
            hero("filler1", &["a"], 1, &[]),
            hero("filler2", &["a"], 1, &[]),
            hero("Pet", &[], 1, &[]),
        ];

        let pool = build_candidate_pool(&leader, &roster, &HashSet::new(), 1);
        let names: Vec<&str> = pool.iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, vec!["Pet"]);
    }
}
