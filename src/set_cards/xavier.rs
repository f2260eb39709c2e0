use super::{all, skill, BuffEntries, SetCardTable};
use crate::combat::buffs::SkillBuff;
use crate::combat::skill::names;
use crate::data::catalog::{CompanionId, SetCardId};

// Enemy defence reduction from Night Vow III/IV is not modelled.
pub static NIGHT_VOW: SetCardTable = SetCardTable {
    id: SetCardId::NightVow,
    home: Some(CompanionId::KingOfDarknight),
    stages: [
        &[all(SkillBuff::damage(8.0))],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::CROWNED_ACTIVE, SkillBuff::damage(40.0)),
        ],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::CROWNED_ACTIVE, SkillBuff::damage(40.0)),
        ],
        &[
            all(SkillBuff::damage(16.0)),
            skill(names::CROWNED_ACTIVE, SkillBuff::damage(40.0).and_count(2.0)),
            skill(names::CROWNED_SUPPORT, SkillBuff::damage(24.0)),
        ],
    ],
};

pub static MIDNIGHT: SetCardTable = SetCardTable {
    id: SetCardId::Midnight,
    home: Some(CompanionId::Lumiere),
    stages: [
        &[all(SkillBuff::damage(8.0))],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::MOONLIGHT, SkillBuff::damage(25.0).and_count(1.34)),
        ],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::MOONLIGHT, SkillBuff::damage(25.0).and_count(1.34)),
        ],
        &[
            all(SkillBuff::damage(16.0)),
            skill(
                names::MOONLIGHT,
                SkillBuff::damage(25.0).and_count(1.34).and_crit_dmg(30.0),
            ),
        ],
    ],
};

const ACTIVE_BOOST: SkillBuff = SkillBuff::damage(25.0);

const LIGHT_SEEKING_BASE: BuffEntries = &[
    all(SkillBuff::damage(8.0)),
    skill(names::ACTIVE, ACTIVE_BOOST),
    skill(names::GREATSWORD_ACTIVE, ACTIVE_BOOST),
    skill(names::SWORD_ACTIVE, ACTIVE_BOOST),
    skill(names::STAFF_ACTIVE, ACTIVE_BOOST),
    skill(names::PISTOL_ACTIVE, ACTIVE_BOOST),
];

pub static LIGHT_SEEKING: SetCardTable = SetCardTable {
    id: SetCardId::LightSeeking,
    home: Some(CompanionId::LightSeeker),
    stages: [
        LIGHT_SEEKING_BASE,
        LIGHT_SEEKING_BASE,
        LIGHT_SEEKING_BASE,
        &[
            all(SkillBuff::damage(16.0)),
            skill(names::ACTIVE, ACTIVE_BOOST.and_count(1.4)),
            skill(names::GREATSWORD_ACTIVE, ACTIVE_BOOST),
            skill(names::SWORD_ACTIVE, ACTIVE_BOOST),
            skill(names::STAFF_ACTIVE, ACTIVE_BOOST),
            skill(names::PISTOL_ACTIVE, ACTIVE_BOOST),
        ],
    ],
};
