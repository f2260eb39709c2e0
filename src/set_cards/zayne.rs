use super::{all, skill, SetCardTable};
use crate::combat::buffs::SkillBuff;
use crate::combat::skill::names;
use crate::data::catalog::{CompanionId, SetCardId};

const ASCENDED_SUPPORT: SkillBuff = SkillBuff::count(1.5).and_damage(28.4);

pub static DIVINER: SetCardTable = SetCardTable {
    id: SetCardId::Diviner,
    home: Some(CompanionId::GodOfAnnihilation),
    stages: [
        &[all(SkillBuff::damage(8.0))],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::ASCENDED_SUPPORT, ASCENDED_SUPPORT),
        ],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::ASCENDED_SUPPORT, ASCENDED_SUPPORT),
            skill(names::ACTIVE, SkillBuff::damage(20.0)),
        ],
        &[
            // judgement uptime adds 30% for 80% of the rotation
            all(SkillBuff::damage(16.0 + 30.0 * 0.8)),
            skill(names::ASCENDED_SUPPORT, ASCENDED_SUPPORT),
            skill(names::SOUL_RIFT_BREAK, SkillBuff::count(1.5)),
            skill(names::ACTIVE, SkillBuff::damage(20.0)),
            skill(names::HEAVY_ATTACK, SkillBuff::count(2.0)),
            skill(names::GOLDEN_FEATHER, SkillBuff::count(2.5)),
        ],
    ],
};

// Snowfall's enemy defence reduction is not modelled.
pub static SNOWFALL: SetCardTable = SetCardTable {
    id: SetCardId::Snowfall,
    home: Some(CompanionId::MasterOfFate),
    stages: [
        &[all(SkillBuff::damage(8.0))],
        &[
            all(SkillBuff::damage(8.0).and_weaken(5.0)),
            skill(names::OATH, SkillBuff::damage(5.0)),
        ],
        &[
            all(SkillBuff::damage(8.0).and_weaken(5.0)),
            skill(names::OATH, SkillBuff::weaken(5.0)),
        ],
        &[
            all(SkillBuff::damage(16.0).and_weaken(5.0)),
            skill(names::OATH, SkillBuff::weaken(5.0)),
            skill(names::JADE_BREAKER, SkillBuff::damage(100.0)),
            skill(names::PIERCING_RAIN, SkillBuff::count(1.34)),
        ],
    ],
};

const SIN_OF_ETERNITY: SkillBuff = SkillBuff::damage(25.0);
/// 12% for 12 of every 15 seconds under the warding spell.
const WARD_UPTIME_BOOST: f64 = 0.8 * 12.0;
/// 10% for 10 seconds after each of four resonances.
const RESONANCE_UPTIME_BOOST: f64 = 0.6 * 10.0;

pub static FOREVER: SetCardTable = SetCardTable {
    id: SetCardId::Forever,
    home: Some(CompanionId::Foreseer),
    stages: [
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::SIN_OF_ETERNITY, SIN_OF_ETERNITY),
        ],
        &[
            all(SkillBuff::damage(8.0 + WARD_UPTIME_BOOST)),
            skill(names::SIN_OF_ETERNITY, SIN_OF_ETERNITY),
        ],
        &[
            all(SkillBuff::damage(8.0 + WARD_UPTIME_BOOST + RESONANCE_UPTIME_BOOST)),
            skill(names::SIN_OF_ETERNITY, SIN_OF_ETERNITY),
        ],
        &[
            all(SkillBuff::damage(16.0 + WARD_UPTIME_BOOST + RESONANCE_UPTIME_BOOST)),
            skill(names::SIN_OF_ETERNITY, SIN_OF_ETERNITY),
        ],
    ],
};
