//! World state schema, invariant verification, and canonical hashing.

pub mod hash;
pub mod invariants;
pub mod schema;

pub use hash::hash_state;
pub use invariants::verify_invariants;
pub use schema::{
    Active, Contracts, Draft, Economy, Guild, Hero, HeroSkill, Heroes, IdCounters, Meta, Posted,
    Region, ReturnPacket, State,
};
