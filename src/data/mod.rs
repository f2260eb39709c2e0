pub mod catalog;
pub mod import;
pub mod record;
pub mod stats;
pub mod validate;

pub use catalog::{CompanionId, Partner, SetCardId};
pub use record::BattleRecord;
pub use stats::{Matching, Stage, Stats, Weapon};
