//! Events emitted by a step (SPEC_FULL.md §6, §9).
//!
//! Closed tagged variants, not an open class hierarchy — new kinds are
//! added at this one site. `seq`/`cmd_id` are assigned once, in a final
//! pass over the step's accumulated `EventKind`s, keeping the pipeline
//! stages themselves compositional (SPEC_FULL.md §9).

use guildsim_core::{ActiveId, CmdId, ContractId, HeroId, Outcome, RejectReason};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub seq: u32,
    pub cmd_id: CmdId,
    pub kind: EventKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    DayStarted { day_index: i32 },
    InboxGenerated { count: u32 },
    HeroesArrived { hero_ids: Vec<HeroId> },
    ContractPosted { board_contract_id: ContractId },
    ContractTaken {
        active_contract_id: ActiveId,
        board_contract_id: ContractId,
        hero_id: HeroId,
    },
    ContractResolved {
        outcome: Outcome,
        trophies_count: i32,
        active_contract_id: ActiveId,
        board_contract_id: ContractId,
    },
    ReturnClosed { active_contract_id: ActiveId },
    TrophiesSold { amount: i32, proceeds: i64 },
    DayEnded { day_index: i32 },
    CommandRejected { reason: RejectReason },
    InvariantViolated { description: String },
}
