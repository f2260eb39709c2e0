use super::{all, skill, BuffEntries, SetCardTable};
use crate::combat::buffs::SkillBuff;
use crate::combat::skill::names;
use crate::data::catalog::{CompanionId, SetCardId};

const MISTSEA_LOW: BuffEntries = &[
    all(SkillBuff::damage(8.0)),
    skill(names::WEAPON_PASSIVE_HEAVY, SkillBuff::count(1.5)),
    skill(names::BLESSED_WEAPON_PASSIVE_HEAVY, SkillBuff::count(1.5)),
];

const EMPOWERED_HEAVY: SkillBuff = SkillBuff::count(1.5).and_damage(50.0);

pub static MISTSEA: SetCardTable = SetCardTable {
    id: SetCardId::Mistsea,
    home: Some(CompanionId::LemurianSeaGod),
    stages: [
        MISTSEA_LOW,
        MISTSEA_LOW,
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::WEAPON_PASSIVE_HEAVY, EMPOWERED_HEAVY),
            skill(names::BLESSED_WEAPON_PASSIVE_HEAVY, EMPOWERED_HEAVY),
        ],
        &[
            all(SkillBuff::damage(16.0)),
            skill(names::WEAPON_PASSIVE_HEAVY, EMPOWERED_HEAVY),
            skill(names::BLESSED_WEAPON_PASSIVE_HEAVY, EMPOWERED_HEAVY),
            skill(names::BLESSED_ACTIVE, SkillBuff::count(1.34)),
            skill(names::THUNDER_CRYSTAL, SkillBuff::count(1.34)),
            skill(names::THUNDER_TIDE, SkillBuff::count(1.34).and_damage(70.0)),
            // fewer blessed basics; below one so the count stays as is
            skill(names::BLESSED_BASIC_ATTACK, SkillBuff::count(0.88)),
        ],
    ],
};

/// Sea spirits strike 12 times instead of 7 and hit harder in the rain.
const SEA_SPIRIT_COUNT: f64 = 1.7;

pub static TEMPLE: SetCardTable = SetCardTable {
    id: SetCardId::Temple,
    home: Some(CompanionId::GodOfTheTides),
    stages: [
        &[all(SkillBuff::damage(8.0).and_crit_dmg(7.0))],
        &[
            all(SkillBuff::damage(8.0).and_crit_dmg(8.0)),
            skill(names::SEA_SPIRIT, SkillBuff::damage(8.3).and_count(SEA_SPIRIT_COUNT)),
        ],
        &[
            all(SkillBuff::damage(8.0).and_crit_dmg(9.0)),
            skill(names::SEA_SPIRIT, SkillBuff::damage(12.5).and_count(SEA_SPIRIT_COUNT)),
        ],
        &[
            all(SkillBuff::damage(16.0).and_crit_dmg(10.0)),
            skill(names::SEA_SPIRIT, SkillBuff::damage(12.5).and_count(SEA_SPIRIT_COUNT)),
        ],
    ],
};

/// Burn grants 20% damage for the share of the rotation it stays up.
const BURN_BOOST: f64 = 20.0;
const POWER_SLASH_CRIT: SkillBuff = SkillBuff::crit_dmg(30.0);

pub static DEEP_SEA: SetCardTable = SetCardTable {
    id: SetCardId::DeepSea,
    home: Some(CompanionId::AbyssWalker),
    stages: [
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::POWER_SLASH, POWER_SLASH_CRIT),
        ],
        &[
            all(SkillBuff::damage(8.0 + BURN_BOOST * 0.5)),
            skill(names::POWER_SLASH, POWER_SLASH_CRIT),
        ],
        &[
            all(SkillBuff::damage(8.0 + BURN_BOOST * 0.7)),
            skill(names::POWER_SLASH, POWER_SLASH_CRIT),
        ],
        &[
            all(SkillBuff::damage(16.0 + BURN_BOOST * 0.7)),
            skill(names::POWER_SLASH, POWER_SLASH_CRIT.and_damage(150.0)),
        ],
    ],
};
