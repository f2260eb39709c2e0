use super::{all, skill, SetCardTable};
use crate::combat::buffs::SkillBuff;
use crate::combat::skill::names;
use crate::data::catalog::{CompanionId, SetCardId};

const RESONANT_OATH: SkillBuff = SkillBuff::oath(20.0);
/// Bonus shared by the normal attacks once Lone Road reaches stage II.
const FREQUENCY_BOOST: SkillBuff = SkillBuff::damage(10.0);

pub static LONE_ROAD: SetCardTable = SetCardTable {
    id: SetCardId::LoneRoad,
    home: Some(CompanionId::UltimateWeaponX02),
    stages: [
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::OATH_AWAKENING, RESONANT_OATH),
            skill(names::OATH_STRIKE, RESONANT_OATH),
        ],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::OATH_AWAKENING, RESONANT_OATH.and_damage(8.0 / 12.0)),
            skill(names::OATH_STRIKE, RESONANT_OATH.and_damage(8.0 / 12.0)),
            skill(names::BASIC_ATTACK, FREQUENCY_BOOST),
            skill(names::ACTIVE, FREQUENCY_BOOST),
            skill(names::SUPPORT, FREQUENCY_BOOST),
        ],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::OATH_AWAKENING, RESONANT_OATH.and_damage(2.0 + 8.0 / 12.0)),
            skill(names::OATH_STRIKE, RESONANT_OATH.and_damage(2.0 + 8.0 / 12.0)),
            skill(names::BASIC_ATTACK, FREQUENCY_BOOST),
            skill(names::ACTIVE, FREQUENCY_BOOST),
            skill(names::SUPPORT, FREQUENCY_BOOST),
            skill(names::RESONANCE, SkillBuff::damage(2.0)),
        ],
        &[
            all(SkillBuff::damage(16.0)),
            skill(names::OATH_AWAKENING, RESONANT_OATH.and_damage(2.0 + 8.0 / 12.0)),
            skill(
                names::OATH_STRIKE,
                RESONANT_OATH
                    .and_damage(32.8 + 2.0 + 8.0 / 12.0)
                    .and_count(1.67),
            ),
            skill(names::BASIC_ATTACK, FREQUENCY_BOOST),
            skill(names::ACTIVE, FREQUENCY_BOOST),
            skill(names::SUPPORT, FREQUENCY_BOOST),
            skill(names::RESONANCE, SkillBuff::damage(2.0)),
        ],
    ],
};

const DEEP_STRIKE: SkillBuff = SkillBuff::damage(40.0);

pub static FARSPACE: SetCardTable = SetCardTable {
    id: SetCardId::Farspace,
    home: Some(CompanionId::FarspaceColonel),
    stages: [
        &[all(SkillBuff::damage(8.0))],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::DEEP_STRIKE, DEEP_STRIKE),
        ],
        &[
            all(SkillBuff::damage(17.0)),
            skill(names::DEEP_STRIKE, DEEP_STRIKE),
        ],
        &[
            all(SkillBuff::damage(30.0)),
            skill(names::DEEP_STRIKE, DEEP_STRIKE),
        ],
    ],
};
