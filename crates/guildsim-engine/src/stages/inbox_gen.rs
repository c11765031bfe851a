//! Inbox generation, the first `AdvanceDay` sub-stage (SPEC_FULL.md §4.3).

use guildsim_core::constants::{DIFFICULTY_BOUND, INBOX_COUNT_BOUND};
use guildsim_rng::Rng;
use guildsim_state::{Draft, State};
use tracing::debug;

use crate::events::EventKind;

/// Append `1..=3` new drafts deterministically from `rng`. Emits one
/// `InboxGenerated` for the whole batch, not per draft.
pub fn run(state: &mut State, rng: &mut Rng, events: &mut Vec<EventKind>) {
    let count = rng.next_int(INBOX_COUNT_BOUND) + 1;

    for _ in 0..count {
        let difficulty = rng.next_int(DIFFICULTY_BOUND) as i32;
        let id = state.alloc_contract_id();
        state.contracts.inbox.push(Draft { id, difficulty });
    }

    debug!(count, "inbox generated");
    events.push(EventKind::InboxGenerated { count: count as u32 });
}
