pub mod buffs;
pub mod engine;
pub mod skill;

pub use buffs::{apply_stage_buff, BuffTarget, SkillBuff, StageBuff};
pub use engine::{score_flow, CombatPower, ScoreTotals};
pub use skill::{CompanionFlow, Period, Skill, SkillSet};
