//! The immutable world state and its sub-records (SPEC_FULL.md §3).
//!
//! `State` and everything it contains is plain data: pipeline stages and
//! the reducer consume an owned `State`, mutate a local clone, and return
//! the result as the new value rather than mutating a shared instance.
//! Cross-references between records (`Posted.locked_by_active`,
//! `Active.board_contract_id`) are plain ids reconstituted by lookup — see
//! DESIGN.md on the Posted/Active back-reference pair.

use guildsim_core::{ActiveId, ActiveState, ContractId, HeroId, HeroStatus, Outcome, SalvagePolicy};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdCounters {
    pub next_contract_id: i64,
    pub next_hero_id: i64,
    pub next_active_contract_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub save_version: u16,
    pub seed: u32,
    pub day_index: i32,
    pub revision: i64,
    pub ids: IdCounters,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Economy {
    pub money_copper: i64,
    pub trophies_stock: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub guild_rank: i32,
    pub reputation: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub stability: i32,
}

/// An unposted contract sitting in the inbox.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: ContractId,
    pub difficulty: i32,
}

/// A contract placed on the public board, visible to heroes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Posted {
    pub board_contract_id: ContractId,
    pub draft_id: ContractId,
    pub fee: i64,
    pub salvage: SalvagePolicy,
    pub posted_day: i32,
    pub locked_by_active: Option<ActiveId>,
    /// Carried over from the originating `Draft` — the board/archive never
    /// keep the draft around, so resolution needs it copied forward.
    pub difficulty: i32,
}

/// A contract taken by a hero, in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Active {
    pub active_contract_id: ActiveId,
    pub board_contract_id: ContractId,
    pub hero_id: HeroId,
    pub taken_day: i32,
    pub state: ActiveState,
}

/// A resolved-but-not-yet-settled contract awaiting close.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnPacket {
    pub active_contract_id: ActiveId,
    pub outcome: Outcome,
    pub trophies_count: i32,
    pub requires_player_close: bool,
    pub closed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroSkill {
    pub power: i32,
}

impl HeroSkill {
    pub fn power(&self) -> i32 {
        self.power
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub hero_id: HeroId,
    pub skill: HeroSkill,
    pub status: HeroStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contracts {
    pub inbox: Vec<Draft>,
    pub board: Vec<Posted>,
    pub active: Vec<Active>,
    pub returns: Vec<ReturnPacket>,
    pub archive: Vec<Posted>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heroes {
    pub roster: Vec<Hero>,
    pub arrivals_today: Vec<HeroId>,
}

/// The fully immutable world snapshot. `saveVersion` is frozen at `1` —
/// schema migration is out of scope (SPEC_FULL.md §1 Non-goals).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub meta: Meta,
    pub economy: Economy,
    pub guild: Guild,
    pub region: Region,
    pub contracts: Contracts,
    pub heroes: Heroes,
}

impl State {
    /// Allocate the next contract id (shared by drafts and board postings)
    /// and advance the counter.
    pub fn alloc_contract_id(&mut self) -> ContractId {
        let id = self.meta.ids.next_contract_id;
        self.meta.ids.next_contract_id += 1;
        ContractId(id)
    }

    pub fn alloc_hero_id(&mut self) -> HeroId {
        let id = self.meta.ids.next_hero_id;
        self.meta.ids.next_hero_id += 1;
        HeroId(id)
    }

    pub fn alloc_active_id(&mut self) -> ActiveId {
        let id = self.meta.ids.next_active_contract_id;
        self.meta.ids.next_active_contract_id += 1;
        ActiveId(id)
    }
}

impl Contracts {
    pub fn find_draft(&self, id: ContractId) -> Option<&Draft> {
        self.inbox.iter().find(|d| d.id == id)
    }

    pub fn take_draft(&mut self, id: ContractId) -> Option<Draft> {
        let idx = self.inbox.iter().position(|d| d.id == id)?;
        Some(self.inbox.remove(idx))
    }

    pub fn find_posted_board(&self, id: ContractId) -> Option<&Posted> {
        self.board.iter().find(|p| p.board_contract_id == id)
    }

    pub fn find_posted_board_mut(&mut self, id: ContractId) -> Option<&mut Posted> {
        self.board.iter_mut().find(|p| p.board_contract_id == id)
    }

    pub fn is_archived(&self, id: ContractId) -> bool {
        self.archive.iter().any(|p| p.board_contract_id == id)
    }

    /// Remove a board posting and move it to the archive.
    pub fn archive_posted(&mut self, id: ContractId) -> bool {
        if let Some(idx) = self.board.iter().position(|p| p.board_contract_id == id) {
            let mut posting = self.board.remove(idx);
            posting.locked_by_active = None;
            self.archive.push(posting);
            true
        } else {
            false
        }
    }

    pub fn find_active_mut(&mut self, id: ActiveId) -> Option<&mut Active> {
        self.active.iter_mut().find(|a| a.active_contract_id == id)
    }

    pub fn find_active(&self, id: ActiveId) -> Option<&Active> {
        self.active.iter().find(|a| a.active_contract_id == id)
    }

    pub fn find_return_mut(&mut self, id: ActiveId) -> Option<&mut ReturnPacket> {
        self.returns.iter_mut().find(|r| r.active_contract_id == id)
    }
}

impl Heroes {
    pub fn find(&self, id: HeroId) -> Option<&Hero> {
        self.roster.iter().find(|h| h.hero_id == id)
    }

    pub fn find_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.roster.iter_mut().find(|h| h.hero_id == id)
    }

    pub fn idle_ascending(&self) -> Vec<HeroId> {
        let mut ids: Vec<HeroId> = self
            .roster
            .iter()
            .filter(|h| h.status == HeroStatus::Idle)
            .map(|h| h.hero_id)
            .collect();
        ids.sort();
        ids
    }
}
