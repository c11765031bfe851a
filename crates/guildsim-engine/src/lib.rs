//! The command-processing engine: commands, events, the outcome resolver,
//! pipeline stages, and the `step` reducer (SPEC_FULL.md §2, §4).

pub mod commands;
pub mod events;
pub mod resolver;

mod reducer;
mod stages;

pub use commands::Command;
pub use events::{Event, EventKind};
pub use reducer::step;
pub use resolver::{resolve_outcome, Decision};
