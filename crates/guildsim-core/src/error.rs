use thiserror::Error;

/// A single invariant finding (SPEC_FULL.md §3). Most variants are
/// constructed in `guildsim-state::invariants::verify_invariants`;
/// `EventSequenceGap` (invariant 6, over a step's events rather than its
/// state) is checked in `guildsim-engine::reducer` instead, after seq
/// numbers are assigned. The `Display` text is what lands in an
/// `InvariantViolated { description }` event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("id {id} in {domain} counter domain is not unique")]
    DuplicateId { domain: &'static str, id: i64 },

    #[error("{domain} counter {next} is not strictly greater than observed max id {max}")]
    IdNotMonotonic {
        domain: &'static str,
        next: i64,
        max: i64,
    },

    #[error("board contract {board_contract_id} is locked by active {locked_by} but no matching active contract in TAKEN/WIP was found")]
    LockedBoardWithoutActive { board_contract_id: i64, locked_by: i64 },

    #[error("active {active_contract_id} is non-resolved but its board contract {board_contract_id} is neither locked by it nor archived")]
    ActiveWithoutMatchingLock {
        active_contract_id: i64,
        board_contract_id: i64,
    },

    #[error("auto-closed return for active {active_contract_id} left board contract {board_contract_id} off the archive or still on the board")]
    AutoCloseNotArchived {
        active_contract_id: i64,
        board_contract_id: i64,
    },

    #[error("active {active_contract_id} references draft {draft_id} still sitting in the inbox")]
    ActiveReferencesInboxDraft {
        active_contract_id: i64,
        draft_id: i64,
    },

    #[error("{field} value {value} is out of its declared range [{min}, {max}]")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("event sequence numbers in this step are not a gapless 1..N run: {seqs:?}")]
    EventSequenceGap { seqs: Vec<u32> },
}
