//! Closed tagged enums shared across the simulation core.
//!
//! New variants are added at a single site in each enum rather than through
//! open class hierarchies — see DESIGN.md / SPEC_FULL.md §9.

use serde::{Deserialize, Serialize};

/// The result of resolving an `Active` contract in `WIP`.
///
/// Branch selection never depends on [`SalvagePolicy`] — the policy only
/// governs how trophies/money are split once the branch is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Full success. `trophies_count > 0`. Auto-closed.
    Success,
    /// Partial success. `trophies_count >= 0`. Requires player close.
    Partial,
    /// Clean failure, no trophies. Requires player close.
    Fail,
    /// The hero died. Requires player close.
    Death,
    /// The hero went missing. Requires player close.
    Missing,
}

impl Outcome {
    /// `true` for the death-like bucket (Death or Missing).
    pub fn is_death_like(&self) -> bool {
        matches!(self, Outcome::Death | Outcome::Missing)
    }

    /// Whether a resolve of this outcome auto-closes (no player action
    /// required) or leaves a `ReturnPacket` open for `CloseReturn`.
    pub fn requires_player_close(&self) -> bool {
        !matches!(self, Outcome::Success)
    }
}

/// Who benefits from a contract's trophy settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalvagePolicy {
    /// The hero's cut is favored; the guild still books the copper.
    Hero,
    /// The guild keeps the full conversion and visibly prospers for it.
    Guild,
}

/// Lifecycle state of an `Active` contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveState {
    Taken,
    Wip,
    Resolved,
}

/// A hero's availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroStatus {
    Idle,
    Busy,
    Dead,
    Missing,
}

/// Why a command was rejected. Carried on `CommandRejected` events; never
/// a Rust `Err` — `step` is infallible and always returns a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    NotFound,
    InvalidState,
    PreconditionFailed,
    Conflict,
}
