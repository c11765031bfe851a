//! Pure invariant verifier over a [`State`] (SPEC_FULL.md §4.5).
//!
//! `verify_invariants` never mutates its argument and never panics on a
//! malformed state — a malformed state is exactly what it exists to
//! describe. It is called by the reducer after every step and may also be
//! called directly by test harnesses.

use guildsim_core::{ActiveState, Violation};
use std::collections::HashSet;

use crate::schema::State;

pub fn verify_invariants(state: &State) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_id_domains(state, &mut violations);
    check_locked_board(state, &mut violations);
    check_auto_close_archived(state, &mut violations);
    check_no_active_on_inbox_draft(state, &mut violations);
    check_ranges(state, &mut violations);

    violations
}

fn check_id_domains(state: &State, violations: &mut Vec<Violation>) {
    let contract_ids = state
        .contracts
        .inbox
        .iter()
        .map(|d| d.id.0)
        .chain(state.contracts.board.iter().map(|p| p.board_contract_id.0))
        .chain(state.contracts.archive.iter().map(|p| p.board_contract_id.0));
    check_domain(
        "contract",
        contract_ids,
        state.meta.ids.next_contract_id,
        violations,
    );

    let hero_ids = state.heroes.roster.iter().map(|h| h.hero_id.0);
    check_domain("hero", hero_ids, state.meta.ids.next_hero_id, violations);

    let active_ids = state.contracts.active.iter().map(|a| a.active_contract_id.0);
    check_domain(
        "active",
        active_ids,
        state.meta.ids.next_active_contract_id,
        violations,
    );
}

fn check_domain(
    domain: &'static str,
    ids: impl Iterator<Item = i64>,
    next: i64,
    violations: &mut Vec<Violation>,
) {
    let mut seen = HashSet::new();
    let mut max_seen = i64::MIN;
    for id in ids {
        if !seen.insert(id) {
            violations.push(Violation::DuplicateId { domain, id });
        }
        max_seen = max_seen.max(id);
    }
    if max_seen != i64::MIN && next <= max_seen {
        violations.push(Violation::IdNotMonotonic {
            domain,
            next,
            max: max_seen,
        });
    }
}

/// Whether `active` still legitimately holds `posted`'s lock: either it's
/// still in flight (`Taken`/`Wip`), or it resolved to a player-close
/// outcome whose `ReturnPacket` hasn't been closed yet. The lock must
/// survive that window — clearing it at resolve time would let
/// `take::run` re-acquire a posting that's still awaiting `CloseReturn`.
fn active_holds_lock(state: &State, active: &guildsim_core::ActiveId, board_contract_id: guildsim_core::ContractId) -> bool {
    state.contracts.active.iter().any(|a| {
        a.active_contract_id == *active
            && a.board_contract_id == board_contract_id
            && match a.state {
                ActiveState::Taken | ActiveState::Wip => true,
                ActiveState::Resolved => state
                    .contracts
                    .returns
                    .iter()
                    .any(|r| r.active_contract_id == *active && r.requires_player_close && !r.closed),
            }
    })
}

fn check_locked_board(state: &State, violations: &mut Vec<Violation>) {
    for posted in &state.contracts.board {
        if let Some(locked_by) = posted.locked_by_active {
            if !active_holds_lock(state, &locked_by, posted.board_contract_id) {
                violations.push(Violation::LockedBoardWithoutActive {
                    board_contract_id: posted.board_contract_id.0,
                    locked_by: locked_by.0,
                });
            }
        }
    }

    for active in &state.contracts.active {
        if matches!(active.state, ActiveState::Resolved) {
            let still_open = state
                .contracts
                .returns
                .iter()
                .any(|r| r.active_contract_id == active.active_contract_id && r.requires_player_close && !r.closed);
            if !still_open {
                continue;
            }
        }
        let lock_matches = state
            .contracts
            .find_posted_board(active.board_contract_id)
            .is_some_and(|p| p.locked_by_active == Some(active.active_contract_id));
        let archived = state.contracts.is_archived(active.board_contract_id);
        if !lock_matches && !archived {
            violations.push(Violation::ActiveWithoutMatchingLock {
                active_contract_id: active.active_contract_id.0,
                board_contract_id: active.board_contract_id.0,
            });
        }
    }
}

fn check_auto_close_archived(state: &State, violations: &mut Vec<Violation>) {
    for ret in &state.contracts.returns {
        if ret.requires_player_close {
            continue;
        }
        let Some(active) = state.contracts.find_active(ret.active_contract_id) else {
            continue;
        };
        let archived = state.contracts.is_archived(active.board_contract_id);
        let still_on_board = state
            .contracts
            .find_posted_board(active.board_contract_id)
            .is_some();
        if !archived || still_on_board {
            violations.push(Violation::AutoCloseNotArchived {
                active_contract_id: ret.active_contract_id.0,
                board_contract_id: active.board_contract_id.0,
            });
        }
    }
}

fn check_no_active_on_inbox_draft(state: &State, violations: &mut Vec<Violation>) {
    for active in &state.contracts.active {
        if let Some(draft) = state.contracts.find_draft(active.board_contract_id) {
            violations.push(Violation::ActiveReferencesInboxDraft {
                active_contract_id: active.active_contract_id.0,
                draft_id: draft.id.0,
            });
        }
    }
}

fn check_ranges(state: &State, violations: &mut Vec<Violation>) {
    range_check(
        "economy.trophiesStock",
        state.economy.trophies_stock as i64,
        0,
        i64::MAX,
        violations,
    );
    range_check(
        "economy.moneyCopper",
        state.economy.money_copper,
        0,
        i64::MAX,
        violations,
    );
    range_check(
        "region.stability",
        state.region.stability as i64,
        0,
        100,
        violations,
    );
    range_check(
        "guild.reputation",
        state.guild.reputation as i64,
        0,
        100,
        violations,
    );
    range_check(
        "guild.guildRank",
        state.guild.guild_rank as i64,
        1,
        i64::MAX,
        violations,
    );
}

fn range_check(field: &'static str, value: i64, min: i64, max: i64, violations: &mut Vec<Violation>) {
    if value < min || value > max {
        violations.push(Violation::ValueOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        Active, Contracts, Economy, Guild, Heroes, IdCounters, Meta, Posted, Region, ReturnPacket,
    };
    use guildsim_core::{ActiveId, ContractId, HeroId, Outcome};

    fn base_state() -> State {
        State {
            meta: Meta {
                save_version: 1,
                seed: 1,
                day_index: 0,
                revision: 0,
                ids: IdCounters {
                    next_contract_id: 1,
                    next_hero_id: 1,
                    next_active_contract_id: 1,
                },
            },
            economy: Economy {
                money_copper: 100,
                trophies_stock: 0,
            },
            guild: Guild {
                guild_rank: 1,
                reputation: 50,
            },
            region: Region { stability: 50 },
            contracts: Contracts {
                inbox: Vec::new(),
                board: Vec::new(),
                active: Vec::new(),
                returns: Vec::new(),
                archive: Vec::new(),
            },
            heroes: Heroes {
                roster: Vec::new(),
                arrivals_today: Vec::new(),
            },
        }
    }

    #[test]
    fn freshly_built_state_has_no_violations() {
        assert!(verify_invariants(&base_state()).is_empty());
    }

    #[test]
    fn duplicate_contract_id_is_flagged() {
        let mut state = base_state();
        state.contracts.board.push(Posted {
            board_contract_id: ContractId(5),
            draft_id: ContractId(5),
            fee: 10,
            salvage: guildsim_core::SalvagePolicy::Guild,
            posted_day: 0,
            locked_by_active: None,
            difficulty: 0,
        });
        state.contracts.archive.push(Posted {
            board_contract_id: ContractId(5),
            draft_id: ContractId(5),
            fee: 10,
            salvage: guildsim_core::SalvagePolicy::Guild,
            posted_day: 0,
            locked_by_active: None,
            difficulty: 0,
        });
        state.meta.ids.next_contract_id = 6;

        let violations = verify_invariants(&state);
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateId { domain: "contract", id: 5 })));
    }

    #[test]
    fn locked_board_without_matching_active_is_flagged() {
        let mut state = base_state();
        state.contracts.board.push(Posted {
            board_contract_id: ContractId(1),
            draft_id: ContractId(1),
            fee: 10,
            salvage: guildsim_core::SalvagePolicy::Hero,
            posted_day: 0,
            locked_by_active: Some(ActiveId(1)),
            difficulty: 0,
        });
        state.meta.ids.next_contract_id = 2;

        let violations = verify_invariants(&state);
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::LockedBoardWithoutActive { .. })));
    }

    #[test]
    fn resolved_active_with_open_return_keeps_its_lock_without_violation() {
        let mut state = base_state();
        state.contracts.board.push(Posted {
            board_contract_id: ContractId(1),
            draft_id: ContractId(1),
            fee: 10,
            salvage: guildsim_core::SalvagePolicy::Hero,
            posted_day: 0,
            locked_by_active: Some(ActiveId(1)),
            difficulty: 2,
        });
        state.contracts.active.push(Active {
            active_contract_id: ActiveId(1),
            board_contract_id: ContractId(1),
            hero_id: HeroId(1),
            taken_day: 0,
            state: ActiveState::Resolved,
        });
        state.contracts.returns.push(ReturnPacket {
            active_contract_id: ActiveId(1),
            outcome: Outcome::Partial,
            trophies_count: 0,
            requires_player_close: true,
            closed: false,
        });
        state.meta.ids.next_contract_id = 2;
        state.meta.ids.next_active_contract_id = 2;

        assert!(
            verify_invariants(&state).is_empty(),
            "a still-open player-close return must not make a locked, resolved active look stale"
        );
    }

    #[test]
    fn resolved_active_with_closed_return_still_locking_the_board_is_flagged() {
        let mut state = base_state();
        state.contracts.board.push(Posted {
            board_contract_id: ContractId(1),
            draft_id: ContractId(1),
            fee: 10,
            salvage: guildsim_core::SalvagePolicy::Hero,
            posted_day: 0,
            locked_by_active: Some(ActiveId(1)),
            difficulty: 2,
        });
        state.contracts.active.push(Active {
            active_contract_id: ActiveId(1),
            board_contract_id: ContractId(1),
            hero_id: HeroId(1),
            taken_day: 0,
            state: ActiveState::Resolved,
        });
        state.contracts.returns.push(ReturnPacket {
            active_contract_id: ActiveId(1),
            outcome: Outcome::Partial,
            trophies_count: 0,
            requires_player_close: true,
            closed: true,
        });
        state.meta.ids.next_contract_id = 2;
        state.meta.ids.next_active_contract_id = 2;

        let violations = verify_invariants(&state);
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::LockedBoardWithoutActive { .. })));
    }

    #[test]
    fn stability_out_of_range_is_flagged() {
        let mut state = base_state();
        state.region.stability = 150;

        let violations = verify_invariants(&state);
        assert!(violations.iter().any(|v| matches!(
            v,
            Violation::ValueOutOfRange { field: "region.stability", .. }
        )));
    }
}
