//! Deterministic genesis construction for the guild simulation (SPEC_FULL.md
//! §4.4, `initialState`).
//!
//! Builds a `State` directly from tuning constants rather than through the
//! reducer — genesis has no command, no RNG draw, and no prior state to
//! start from, the same way `chronx-genesis::apply_genesis` writes its
//! allocations straight into a fresh `StateDb` instead of replaying
//! transactions.

use guildsim_core::constants::{
    FIRST_ID, STARTING_GUILD_RANK, STARTING_MONEY_COPPER, STARTING_REPUTATION,
    STARTING_SAVE_VERSION, STARTING_STABILITY, STARTING_TROPHIES_STOCK,
};
use guildsim_state::{Contracts, Economy, Guild, Heroes, IdCounters, Meta, Region, State};
use tracing::info;

/// Build the day-0 world for `seed`. Two calls with the same seed produce
/// `State`s that are `==` and hash identically — genesis is itself
/// deterministic, even though it consumes no RNG draws.
pub fn initial_state(seed: u32) -> State {
    info!(seed, "building guild simulation genesis state");

    let state = State {
        meta: Meta {
            save_version: STARTING_SAVE_VERSION,
            seed,
            day_index: 0,
            revision: 0,
            ids: IdCounters {
                next_contract_id: FIRST_ID,
                next_hero_id: FIRST_ID,
                next_active_contract_id: FIRST_ID,
            },
        },
        economy: Economy {
            money_copper: STARTING_MONEY_COPPER,
            trophies_stock: STARTING_TROPHIES_STOCK,
        },
        guild: Guild {
            guild_rank: STARTING_GUILD_RANK,
            reputation: STARTING_REPUTATION,
        },
        region: Region {
            stability: STARTING_STABILITY,
        },
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
    };

    info!(
        money_copper = state.economy.money_copper,
        stability = state.region.stability,
        guild_rank = state.guild.guild_rank,
        reputation = state.guild.reputation,
        "genesis state built"
    );

    state
}
