//! Shared settlement logic for auto-close (`resolve_stage`) and manual
//! close (`stages::close`) — SPEC_FULL.md §4.3 "SalvagePolicy settlement".
//!
//! Both paths move the originating `Posted` to the archive, credit
//! trophies/copper, and return the hero to `Idle` unless the outcome was
//! death-like (that status transition already happened in `resolve_stage`,
//! at the moment the outcome was known).

use guildsim_core::constants::{
    COPPER_PER_TROPHY, REPUTATION_DELTA_GUILD_SALVAGE, REPUTATION_DELTA_HERO_SALVAGE,
    REPUTATION_MAX, REPUTATION_MIN,
};
use guildsim_core::{ContractId, HeroId, HeroStatus, Outcome, SalvagePolicy};
use guildsim_state::State;

/// Apply settlement effects for a resolved contract. Idempotent on the
/// board/archive move (archiving an already-archived id is a no-op via
/// `Contracts::archive_posted`'s position lookup), but callers must not
/// invoke this twice for the same contract — the return packet's `closed`
/// flag is what prevents that at the command layer.
pub fn apply(
    state: &mut State,
    board_contract_id: ContractId,
    hero_id: HeroId,
    outcome: Outcome,
    trophies_count: i32,
) {
    let salvage = state
        .contracts
        .find_posted_board(board_contract_id)
        .map(|p| p.salvage)
        .unwrap_or(SalvagePolicy::Guild);

    state.contracts.archive_posted(board_contract_id);

    if trophies_count > 0 {
        state.economy.trophies_stock += trophies_count;
        state.economy.money_copper += trophies_count as i64 * COPPER_PER_TROPHY;

        let delta = match salvage {
            SalvagePolicy::Guild => REPUTATION_DELTA_GUILD_SALVAGE,
            SalvagePolicy::Hero => REPUTATION_DELTA_HERO_SALVAGE,
        };
        state.guild.reputation = (state.guild.reputation + delta).clamp(REPUTATION_MIN, REPUTATION_MAX);
    }

    if !outcome.is_death_like() {
        if let Some(hero) = state.heroes.find_mut(hero_id) {
            hero.status = HeroStatus::Idle;
        }
    }
}
