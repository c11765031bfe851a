pub mod constants;
pub mod enums;
pub mod error;
pub mod ids;

pub use enums::{ActiveState, HeroStatus, Outcome, RejectReason, SalvagePolicy};
pub use error::Violation;
pub use ids::{ActiveId, CmdId, ContractId, HeroId};
