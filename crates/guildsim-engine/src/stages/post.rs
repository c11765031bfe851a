//! `PostContract` (SPEC_FULL.md §4.4).

use guildsim_core::{ContractId, SalvagePolicy};
use guildsim_state::{Posted, State};
use tracing::debug;

use crate::events::EventKind;

/// Move a validated draft from the inbox onto the board. The board
/// contract keeps the draft's id (`draft_id == board_contract_id`) — both
/// ids are drawn from the same counter domain and the draft is removed
/// from the inbox in the same move, so reuse introduces no collision.
pub fn run(
    state: &mut State,
    inbox_id: ContractId,
    fee: i64,
    salvage: SalvagePolicy,
    events: &mut Vec<EventKind>,
) {
    let draft = state
        .contracts
        .take_draft(inbox_id)
        .expect("validated: inbox_id exists in inbox");

    let board_contract_id = draft.id;
    state.contracts.board.push(Posted {
        board_contract_id,
        draft_id: draft.id,
        fee,
        salvage,
        posted_day: state.meta.day_index,
        locked_by_active: None,
        difficulty: draft.difficulty,
    });

    debug!(%board_contract_id, fee, "contract posted");
    events.push(EventKind::ContractPosted { board_contract_id });
}
