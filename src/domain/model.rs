use crate::utils::error::{Result, SquadError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum `leadership_ability` for a hero to head a squad.
pub const DEFAULT_LEADERSHIP_THRESHOLD: i64 = 7;
/// A leader at exactly this ability doubles the squad score once more.
pub const PERFECT_LEADERSHIP: i64 = 10;
/// One leader plus a trio.
pub const SQUAD_SIZE: usize = 4;
pub const TRIO_SIZE: usize = 3;
/// Default candidate pool cap per leader.
pub const DEFAULT_POOL_SIZE: usize = 30;

/// A roster entry. Immutable once decoded; `name` is the entity key and is
/// assumed unique within one roster (lookups are first-match).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub name: String,
    pub powers: Vec<String>,
    #[serde(rename = "leadershipAbility")]
    pub leadership_ability: i64,
    /// One-directional preferences by name. Targets may be absent from the
    /// roster entirely.
    pub affinities: Vec<String>,
}

impl Hero {
    /// Number of distinct power tags; duplicate tags in a record count once.
    pub fn distinct_power_count(&self) -> usize {
        self.powers
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// One committed squad: the leader's name, its score, and all four member
/// names with the leader first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SquadRecord {
    pub leader: String,
    pub score: u64,
    pub squad: Vec<String>,
}

/// Decodes a fetched roster document into heroes.
///
/// The payload must be a JSON array and every element must conform to the
/// `Hero` shape exactly; a missing field, a wrong type, or an extra field
/// fails the whole run. There is no partial-roster recovery.
pub fn decode_roster(payload: serde_json::Value) -> Result<Vec<Hero>> {
    let items = match payload {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(SquadError::UnexpectedPayload {
                found: json_type_name(&other).to_string(),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| SquadError::MalformedRecord { index, source })
        })
        .collect()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
