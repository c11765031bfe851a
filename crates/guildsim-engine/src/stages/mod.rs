//! Pure pipeline stages (SPEC_FULL.md §4.3). Each stage is a plain function
//! over `&mut State` (and, where it draws, `&mut Rng`) plus the step's
//! in-progress `Vec<EventKind>` — sequence numbers are assigned once, after
//! every stage has run, by the reducer (SPEC_FULL.md §9).

pub mod arrivals;
pub mod close;
pub mod inbox_gen;
pub mod post;
pub mod resolve_stage;
pub mod sell;
pub mod settlement;
pub mod take;
pub mod wip;
