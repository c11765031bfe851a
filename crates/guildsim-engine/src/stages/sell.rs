//! `SellTrophies` (SPEC_FULL.md §4.4, §9).

use guildsim_core::constants::COPPER_PER_TROPHY;
use guildsim_state::State;
use tracing::debug;

use crate::events::EventKind;

/// `amount == 0` sells the entire stock (a no-op if the stock is already
/// empty); validation has already guaranteed `0 <= amount <= trophiesStock`
/// for any nonzero `amount`. Always emits a `TrophiesSold` event, even when
/// the realized amount is zero (SPEC_FULL.md §9).
pub fn run(state: &mut State, amount: i32, events: &mut Vec<EventKind>) {
    let sold = if amount == 0 { state.economy.trophies_stock } else { amount };
    let proceeds = sold as i64 * COPPER_PER_TROPHY;

    state.economy.trophies_stock -= sold;
    state.economy.money_copper += proceeds;

    debug!(sold, proceeds, "trophies sold");
    events.push(EventKind::TrophiesSold { amount: sold, proceeds });
}
