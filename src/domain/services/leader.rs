use crate::domain::model::Hero;
use std::cmp::Reverse;

pub fn is_qualifying_leader(hero: &Hero, threshold: i64) -> bool {
    hero.leadership_ability >= threshold
}

/// Qualifying heroes in the order the assembler consumes them:
/// leadership ability descending, then distinct power count descending,
/// then affinity count descending. The sort is stable, so remaining ties
/// keep roster order; that only matters for reproducibility.
pub fn rank_leaders<'a>(roster: &'a [Hero], threshold: i64) -> Vec<&'a Hero> {
    let mut leaders: Vec<&Hero> = roster
        .iter()
        .filter(|hero| is_qualifying_leader(hero, threshold))
        .collect();

    leaders.sort_by_cached_key(|hero| {
        (
            Reverse(hero.leadership_ability),
            Reverse(hero.distinct_power_count()),
            Reverse(hero.affinities.len()),
        )
    });

    leaders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_LEADERSHIP_THRESHOLD;

    fn hero(name: &str, powers: &[&str], leadership: i64, affinities: &[&str]) -> Hero {
        Hero {
            name: name.to_string(),
            powers: powers.iter().map(|p| p.to_string()).collect(),
            leadership_ability: leadership,
            affinities: affinities.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(is_qualifying_leader(&hero("A", &[], 7, &[]), 7));
        assert!(!is_qualifying_leader(&hero("B", &[], 6, &[]), 7));
    }

    #[test]
    fn ranks_by_ability_then_powers_then_affinities() {
        let roster = vec![
            hero("low", &["x"], 5, &[]),
            hero("few-powers", &["a"], 9, &["p", "q"]),
            hero("strong", &["a", "b"], 10, &[]),
            hero("many-powers", &["a", "b", "c"], 9, &[]),
            hero("many-affinities", &["a"], 9, &["p", "q", "r"]),
        ];

        let names: Vec<&str> = rank_leaders(&roster, DEFAULT_LEADERSHIP_THRESHOLD)
            .iter()
            .map(|h| h.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec!["strong", "many-powers", "many-affinities", "few-powers"]
        );
    }

    #[test]
    fn full_ties_keep_roster_order() {
        let roster = vec![
            hero("first", &["a"], 8, &["x"]),
            hero("second", &["b"], 8, &["y"]),
        ];

        let names: Vec<&str> = rank_leaders(&roster, 7)
            .iter()
            .map(|h| h.name.as_str())
            .collect();

        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn power_key_uses_distinct_tags() {
        let roster = vec![
            hero("duplicated", &["a", "a", "a"], 8, &[]),
            hero("varied", &["a", "b"], 8, &[]),
        ];

        let names: Vec<&str> = rank_leaders(&roster, 7)
            .iter()
            .map(|h| h.name.as_str())
            .collect();

        assert_eq!(names, vec!["varied", "duplicated"]);
    }

    #[test]
    fn no_qualifying_leaders_is_empty() {
        let roster = vec![hero("weak", &["a"], 3, &[])];
        assert!(rank_leaders(&roster, 7).is_empty());
    }
}
