//! Typed identifiers for the guild simulation core.
//!
//! Every id is a plain integer newtype. Cross-references between records
//! (e.g. `Posted.locked_by_active`, `Active.board_contract_id`) are stored
//! as these ids rather than owning pointers — see DESIGN.md on the
//! Posted/Active back-reference pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a contract record, whether still a [`Draft`](crate) in the
/// inbox or already [`Posted`](crate) on the board. Both draw from the same
/// `next_contract_id` counter in `Meta::ids`, so a board contract's id is
/// never equal to any still-unposted draft's id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContractId(pub i64);

/// Identifies a [`Hero`](crate) in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeroId(pub i64);

/// Identifies an [`Active`](crate) contract (a taken, in-progress contract).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActiveId(pub i64);

/// Caller-supplied correlation id, propagated onto every event a command
/// produces (including a lone `CommandRejected`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CmdId(pub i64);

macro_rules! impl_id_display {
    ($ty:ident, $prefix:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

impl_id_display!(ContractId, "contract#");
impl_id_display!(HeroId, "hero#");
impl_id_display!(ActiveId, "active#");
impl_id_display!(CmdId, "cmd#");
