//! Contract take, the third `AdvanceDay` sub-stage (SPEC_FULL.md §4.3).

use guildsim_core::ActiveState;
use guildsim_core::HeroStatus;
use guildsim_state::{Active, State};
use tracing::debug;

use crate::events::EventKind;

/// Pair every eligible (boardContract, hero) match this day: ascending
/// unlocked board postings against ascending idle heroes, one pairing per
/// index — the lowest-id open posting goes to the lowest-id idle hero, the
/// next-lowest open posting to the next-lowest idle hero, and so on until
/// either side runs out. Each pairing locks its posting and creates an
/// `Active` in `Taken`, emitting its own `ContractTaken`.
pub fn run(state: &mut State, events: &mut Vec<EventKind>) {
    let mut open_board_ids: Vec<_> = state
        .contracts
        .board
        .iter()
        .filter(|p| p.locked_by_active.is_none())
        .map(|p| p.board_contract_id)
        .collect();
    open_board_ids.sort();

    let idle_hero_ids = state.heroes.idle_ascending();
    let taken_day = state.meta.day_index;

    for (&board_contract_id, &hero_id) in open_board_ids.iter().zip(idle_hero_ids.iter()) {
        let active_contract_id = state.alloc_active_id();

        if let Some(posted) = state.contracts.find_posted_board_mut(board_contract_id) {
            posted.locked_by_active = Some(active_contract_id);
        }

        state.contracts.active.push(Active {
            active_contract_id,
            board_contract_id,
            hero_id,
            taken_day,
            state: ActiveState::Taken,
        });

        if let Some(hero) = state.heroes.find_mut(hero_id) {
            hero.status = HeroStatus::Busy;
        }

        debug!(%active_contract_id, %board_contract_id, %hero_id, "contract taken");
        events.push(EventKind::ContractTaken {
            active_contract_id,
            board_contract_id,
            hero_id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guildsim_core::HeroId;
    use guildsim_state::{HeroSkill, Hero, Posted};

    fn idle_hero(state: &mut State, power: i32) -> HeroId {
        let hero_id = state.alloc_hero_id();
        state.heroes.roster.push(Hero {
            hero_id,
            skill: HeroSkill { power },
            status: HeroStatus::Idle,
        });
        hero_id
    }

    fn open_posting(state: &mut State) -> guildsim_core::ContractId {
        let board_contract_id = state.alloc_contract_id();
        state.contracts.board.push(Posted {
            board_contract_id,
            draft_id: board_contract_id,
            fee: 1,
            salvage: guildsim_core::SalvagePolicy::Guild,
            posted_day: 0,
            locked_by_active: None,
            difficulty: 0,
        });
        board_contract_id
    }

    #[test]
    fn pairs_every_eligible_match_not_just_one() {
        let mut state = guildsim_init::initial_state(1);
        let board_a = open_posting(&mut state);
        let board_b = open_posting(&mut state);
        let hero_a = idle_hero(&mut state, 3);
        let hero_b = idle_hero(&mut state, 5);

        let mut events = Vec::new();
        run(&mut state, &mut events);

        assert_eq!(events.len(), 2, "both eligible pairs should be taken in one call");
        assert_eq!(
            state.contracts.find_posted_board(board_a).unwrap().locked_by_active,
            state.contracts.active.iter().find(|a| a.hero_id == hero_a).map(|a| a.active_contract_id)
        );
        assert_eq!(
            state.contracts.find_posted_board(board_b).unwrap().locked_by_active,
            state.contracts.active.iter().find(|a| a.hero_id == hero_b).map(|a| a.active_contract_id)
        );
        assert!(state.heroes.find(hero_a).unwrap().status == HeroStatus::Busy);
        assert!(state.heroes.find(hero_b).unwrap().status == HeroStatus::Busy);
    }

    #[test]
    fn excess_postings_stay_unlocked_when_heroes_run_out() {
        let mut state = guildsim_init::initial_state(1);
        let board_a = open_posting(&mut state);
        let board_b = open_posting(&mut state);
        idle_hero(&mut state, 3);

        let mut events = Vec::new();
        run(&mut state, &mut events);

        assert_eq!(events.len(), 1);
        assert!(state.contracts.find_posted_board(board_a).unwrap().locked_by_active.is_some());
        assert!(state.contracts.find_posted_board(board_b).unwrap().locked_by_active.is_none());
    }
}
