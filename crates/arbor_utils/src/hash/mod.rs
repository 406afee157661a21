//! Hash containers over *hashbrown*, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod state;

pub mod hash_map;

// -----------------------------------------------------------------------------
// Exports

pub use state::FixedHashState;

pub use hash_map::{HashMap, HashSet};

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
