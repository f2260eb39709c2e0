//! Generic weapon kits used whenever a companion is played without its
//! signature weapon.

use crate::combat::skill::{names, Skill};
use crate::data::stats::Weapon;

/// Cap on greatsword active casts per rotation.
const GREATSWORD_ACTIVE_CAP: u32 = 6;

/// Generic active for `weapon`, casting `energy - 8` times.
pub fn active_skill(weapon: Weapon, energy: u32) -> Skill {
    let casts = energy.saturating_sub(8);
    let active = Skill::active().with_count(casts);
    match weapon {
        Weapon::Greatsword => Skill {
            name: names::GREATSWORD_ACTIVE,
            base: 621.0,
            attack_rate: 829.0,
            damage_boost: 50.0,
            count: casts.min(GREATSWORD_ACTIVE_CAP),
            ..active
        },
        Weapon::Sword => Skill {
            name: names::SWORD_ACTIVE,
            base: 341.0,
            attack_rate: 455.0,
            ..active
        },
        Weapon::Staff => Skill {
            name: names::STAFF_ACTIVE,
            base: 204.0,
            attack_rate: 270.0,
            ..active
        },
        Weapon::Pistol => Skill {
            name: names::PISTOL_ACTIVE,
            base: 160.0,
            attack_rate: 213.0,
            ..active
        },
        Weapon::Signature | Weapon::Unspecified => active,
    }
}

/// Generic basic-attack string for `weapon`.
pub fn basic_attack(weapon: Weapon) -> Skill {
    let basic = Skill::basic_attack().with_count(30);
    match weapon {
        Weapon::Greatsword => Skill {
            base: 337.0,
            attack_rate: 449.0,
            damage_boost: 26.0,
            count: 11,
            ..basic
        },
        Weapon::Sword => Skill {
            base: 250.0,
            attack_rate: 333.0,
            damage_boost: 14.0,
            ..basic
        },
        Weapon::Staff => Skill {
            base: 122.0,
            attack_rate: 162.0,
            damage_boost: 28.0,
            count: 15,
            ..basic
        },
        Weapon::Pistol => Skill {
            base: 120.0,
            attack_rate: 160.0,
            damage_boost: 25.0,
            count: 35,
            ..basic
        },
        Weapon::Signature | Weapon::Unspecified => basic,
    }
}
