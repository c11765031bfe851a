//! Resolve, the fifth `AdvanceDay` sub-stage (SPEC_FULL.md §4.3).

use guildsim_core::{ActiveState, HeroStatus, Outcome};
use guildsim_rng::Rng;
use guildsim_state::{ReturnPacket, State};
use tracing::debug;

use crate::events::EventKind;
use crate::resolver;
use crate::stages::settlement;

/// Resolve every `Active` already in `Wip` at the start of this stage.
/// Contracts `wip::run` just promoted from `Taken` this same day are
/// included here — the two-day minimum is enforced by the take→WIP
/// ordering, not by skipping same-day promotions (SPEC_FULL.md §9).
pub fn run(state: &mut State, rng: &mut Rng, events: &mut Vec<EventKind>) {
    let wip_ids: Vec<_> = state
        .contracts
        .active
        .iter()
        .filter(|a| a.state == ActiveState::Wip)
        .map(|a| a.active_contract_id)
        .collect();

    for active_contract_id in wip_ids {
        let active = state
            .contracts
            .find_active(active_contract_id)
            .expect("id just collected from contracts.active")
            .clone();

        let difficulty = state
            .contracts
            .find_posted_board(active.board_contract_id)
            .map(|p| p.difficulty)
            .unwrap_or(0);
        let hero = state.heroes.find(active.hero_id).cloned();

        let decision = resolver::resolve_outcome(hero.as_ref(), difficulty, rng);

        if let Some(active_mut) = state.contracts.find_active_mut(active_contract_id) {
            active_mut.state = ActiveState::Resolved;
        }

        if decision.outcome.is_death_like() {
            if let Some(hero) = state.heroes.find_mut(active.hero_id) {
                hero.status = match decision.outcome {
                    Outcome::Death => HeroStatus::Dead,
                    Outcome::Missing => HeroStatus::Missing,
                    _ => unreachable!("is_death_like implies Death or Missing"),
                };
            }
        }

        let closed = !decision.requires_player_close;
        state.contracts.returns.push(ReturnPacket {
            active_contract_id,
            outcome: decision.outcome,
            trophies_count: decision.trophies_count,
            requires_player_close: decision.requires_player_close,
            closed,
        });

        if closed {
            settlement::apply(
                state,
                active.board_contract_id,
                active.hero_id,
                decision.outcome,
                decision.trophies_count,
            );
        }

        debug!(
            %active_contract_id,
            outcome = ?decision.outcome,
            trophies_count = decision.trophies_count,
            auto_closed = closed,
            "contract resolved"
        );
        events.push(EventKind::ContractResolved {
            outcome: decision.outcome,
            trophies_count: decision.trophies_count,
            active_contract_id,
            board_contract_id: active.board_contract_id,
        });
    }
}
