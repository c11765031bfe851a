//! The command set accepted by [`crate::step`] (SPEC_FULL.md §4.4).

use guildsim_core::{ActiveId, CmdId, ContractId, SalvagePolicy};

/// A closed set of caller-issued commands. New variants are added at this
/// one site, matched exhaustively everywhere a `Command` is consumed.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advance the simulation by one day: inbox-gen, hero-arrivals, take,
    /// WIP-advance, resolve. Always valid.
    AdvanceDay { cmd_id: CmdId },
    /// Move a `Draft` from the inbox onto the public board.
    PostContract {
        inbox_id: ContractId,
        fee: i64,
        salvage: SalvagePolicy,
        cmd_id: CmdId,
    },
    /// Settle an open `ReturnPacket` that requires a player decision.
    CloseReturn { active_contract_id: ActiveId, cmd_id: CmdId },
    /// Convert trophies to copper. `amount == 0` sells the entire stock.
    SellTrophies { amount: i32, cmd_id: CmdId },
}

impl Command {
    /// The correlation id propagated onto every event this command produces.
    pub fn cmd_id(&self) -> CmdId {
        match self {
            Command::AdvanceDay { cmd_id }
            | Command::PostContract { cmd_id, .. }
            | Command::CloseReturn { cmd_id, .. }
            | Command::SellTrophies { cmd_id, .. } => *cmd_id,
        }
    }
}
