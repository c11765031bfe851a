//! `CloseReturn` (SPEC_FULL.md §4.4).

use guildsim_core::ActiveId;
use guildsim_state::State;
use tracing::debug;

use crate::events::EventKind;
use crate::stages::settlement;

/// Settle an open, player-closeable `ReturnPacket`. Validation has already
/// confirmed a matching, unclosed packet exists; this stage only runs once
/// that precondition holds, so the lookups here cannot miss.
pub fn run(state: &mut State, active_contract_id: ActiveId, events: &mut Vec<EventKind>) {
    let (outcome, trophies_count) = {
        let packet = state
            .contracts
            .find_return_mut(active_contract_id)
            .expect("validated: matching open ReturnPacket exists");
        packet.closed = true;
        (packet.outcome, packet.trophies_count)
    };

    let active = state
        .contracts
        .find_active(active_contract_id)
        .expect("validated: Active backing the ReturnPacket exists")
        .clone();

    settlement::apply(
        state,
        active.board_contract_id,
        active.hero_id,
        outcome,
        trophies_count,
    );

    debug!(%active_contract_id, "return closed");
    events.push(EventKind::ReturnClosed { active_contract_id });
}
