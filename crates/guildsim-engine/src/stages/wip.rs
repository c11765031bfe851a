//! WIP-advance, the fourth `AdvanceDay` sub-stage (SPEC_FULL.md §4.3).
//!
//! Emits no event of its own — it exists purely to enforce the two-day
//! minimum (SPEC_FULL.md §9): an `Active` taken today stays `Taken` until
//! a later day's advance promotes it to `Wip`, so `resolve_stage` (which
//! only resolves what is already `Wip` at the start of its own stage)
//! never resolves a contract the same day it was taken.

use guildsim_core::ActiveState;
use guildsim_state::State;

pub fn run(state: &mut State) {
    let today = state.meta.day_index;
    for active in state.contracts.active.iter_mut() {
        if active.state == ActiveState::Taken && active.taken_day < today {
            active.state = ActiveState::Wip;
        }
    }
}
