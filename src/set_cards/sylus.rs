use super::{all, skill, BuffEntries, SetCardTable};
use crate::combat::buffs::SkillBuff;
use crate::combat::skill::names;
use crate::data::catalog::{CompanionId, SetCardId};

/// Weaken bonus while the blood rose mark is up.
const MARK: f64 = 8.0;

pub static CRIMSON_RAPTURE: SetCardTable = SetCardTable {
    id: SetCardId::CrimsonRapture,
    home: Some(CompanionId::SilverwingFiend),
    stages: [
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::ACTIVE, SkillBuff::count(1.6)),
        ],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::ROSE_THORNS, SkillBuff::damage(10.0)),
            skill(names::BLOOD_OATH_ROSE_THORNS, SkillBuff::damage(10.0)),
            skill(names::ROSE_RAIN, SkillBuff::count(2.0)),
            skill(names::ACTIVE, SkillBuff::count(1.6)),
        ],
        &[
            all(SkillBuff::damage(8.0)),
            skill(names::ROSE_THORNS, SkillBuff::damage(10.0)),
            // two of three blood oath thorns land under the mark
            skill(
                names::BLOOD_OATH_ROSE_THORNS,
                SkillBuff::damage(10.0).and_weaken(MARK * 2.0 / 3.0),
            ),
            // one of two rose rains
            skill(names::ROSE_RAIN, SkillBuff::weaken(MARK / 2.0)),
            skill(names::OATH, SkillBuff::weaken(MARK)),
            skill(names::BLOOD_OATH_HEAVY_ATTACK, SkillBuff::weaken(MARK)),
            skill(names::BLOOD_BREAK, SkillBuff::weaken(MARK)),
            skill(names::VEIL_LATTICE, SkillBuff::weaken(MARK)),
            skill(names::BLOOD_ROSE_BULLET, SkillBuff::weaken(MARK)),
            skill(names::ACTIVE, SkillBuff::count(1.6)),
        ],
        &[
            all(SkillBuff::damage(16.0)),
            skill(names::ROSE_THORNS, SkillBuff::damage(10.0 + 10.0)),
            skill(
                names::BLOOD_OATH_ROSE_THORNS,
                SkillBuff::damage(10.0 + 10.0).and_weaken(MARK * 2.0 / 3.0),
            ),
            skill(names::ROSE_RAIN, SkillBuff::damage(10.0).and_weaken(MARK / 2.0)),
            skill(names::OATH, SkillBuff::damage(20.0).and_weaken(MARK)),
            skill(names::BLOOD_OATH_HEAVY_ATTACK, SkillBuff::damage(10.0).and_weaken(MARK)),
            skill(names::BLOOD_BREAK, SkillBuff::damage(10.0).and_weaken(MARK)),
            skill(names::VEIL_LATTICE, SkillBuff::damage(20.0).and_weaken(MARK)),
            skill(names::BLOOD_ROSE_BULLET, SkillBuff::damage(10.0).and_weaken(MARK)),
            skill(names::ACTIVE, SkillBuff::count(1.6)),
        ],
    ],
};

const EXTRA_SUPPORTS: BuffEntries = &[
    all(SkillBuff::damage(8.0)),
    skill(names::SUPPORT, SkillBuff::count(1.34)),
    skill(names::NIGHTMARE_CLAW_SWEEP, SkillBuff::count(1.34)),
];

pub static ABYSSAL: SetCardTable = SetCardTable {
    id: SetCardId::Abyssal,
    home: Some(CompanionId::AbysmSovereign),
    stages: [
        &[all(SkillBuff::damage(8.0))],
        EXTRA_SUPPORTS,
        EXTRA_SUPPORTS,
        &[
            all(SkillBuff::damage(16.0)),
            skill(names::ACTIVE, SkillBuff::damage(30.0)),
            skill(names::SUPPORT, SkillBuff::count(1.34)),
            skill(names::NIGHTMARE_CLAW_SWEEP, SkillBuff::count(1.34)),
        ],
    ],
};

const CAPTIVATING_BASE: BuffEntries = &[all(SkillBuff::damage(8.0 + 4.0))];

/// Stage III onwards refunds energy for 60% more actives, whatever the weapon.
const CAPTIVATING_ACTIVES: BuffEntries = &[
    all(SkillBuff::damage(8.0 + 4.0)),
    skill(names::ACTIVE, SkillBuff::count(1.6)),
    skill(names::GREATSWORD_ACTIVE, SkillBuff::count(1.6)),
    skill(names::SWORD_ACTIVE, SkillBuff::count(1.6)),
    skill(names::STAFF_ACTIVE, SkillBuff::count(1.6)),
    skill(names::PISTOL_ACTIVE, SkillBuff::count(1.6)),
];

pub static CAPTIVATING: SetCardTable = SetCardTable {
    id: SetCardId::Captivating,
    home: Some(CompanionId::RelentlessConqueror),
    stages: [
        CAPTIVATING_BASE,
        CAPTIVATING_BASE,
        CAPTIVATING_ACTIVES,
        CAPTIVATING_ACTIVES,
    ],
};
