//! Combat-power estimation for Love and Deepspace battle records.
//!
//! A [data::record::BattleRecord] is normalized into a
//! [data::stats::Stats] panel, the companion strategy builds its rotation
//! ([combat::skill::CompanionFlow]), the equipped set card's stage buffs
//! are folded in and the scorer reduces the result to a
//! [combat::engine::CombatPower]. [estimator::Estimator] wires the steps.

pub mod cli;
pub mod combat;
pub mod companions;
pub mod config;
pub mod data;
pub mod estimator;
pub mod evaluation;
pub mod logging;
pub mod parallel;
pub mod ruleset;
pub mod server;
pub mod set_cards;

pub use combat::engine::CombatPower;
pub use data::record::BattleRecord;
pub use data::stats::Stats;
pub use estimator::{estimate, Estimator};
