// Squad assembly services. Pure functions over the roster; all state is
// owned by the assembler and lent read-only downward.

pub mod assembler;
pub mod leader;
pub mod pool;
pub mod score;

pub use assembler::assemble_squads;
pub use leader::{is_qualifying_leader, rank_leaders};
pub use pool::build_candidate_pool;
pub use score::score_squad;
