//! Hero arrivals, the second `AdvanceDay` sub-stage (SPEC_FULL.md §4.3).

use guildsim_core::constants::HERO_SKILL_BOUND;
use guildsim_core::HeroStatus;
use guildsim_rng::Rng;
use guildsim_state::{Hero, HeroSkill, State};
use tracing::debug;

use crate::events::EventKind;

/// Exactly one hero arrives per day; only its skill is randomly drawn.
/// `heroes.arrivals_today` is replaced, not accumulated — it describes
/// today's arrivals only.
pub fn run(state: &mut State, rng: &mut Rng, events: &mut Vec<EventKind>) {
    let power = rng.next_int(HERO_SKILL_BOUND) as i32;
    let hero_id = state.alloc_hero_id();

    state.heroes.roster.push(Hero {
        hero_id,
        skill: HeroSkill { power },
        status: HeroStatus::Idle,
    });
    state.heroes.arrivals_today = vec![hero_id];

    debug!(%hero_id, power, "hero arrived");
    events.push(EventKind::HeroesArrived { hero_ids: vec![hero_id] });
}
