//! King of Darknight: an opening phase followed by a crowned phase in which
//! the active, basic attack and support are replaced by stronger variants.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::Stats;

/// Rotations spent in the opening phase.
const NORMAL_PERIODS: u32 = 2;
/// Rotations spent crowned.
const LORD_PERIODS: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct KingOfDarknight;

impl KingOfDarknight {
    /// Generic weapons split their casts across both phases.
    fn split_weapon_active(stats: &Stats) -> Skill {
        let skill = weapon::active_skill(stats.weapon, stats.energy());
        let count = skill.count / 2;
        skill.with_count(count)
    }

    pub fn lord_active_skill(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Self::split_weapon_active(stats);
        }
        Skill {
            name: names::CROWNED_ACTIVE,
            base: 520.0,
            attack_rate: 277.0,
            hp_rate: 25.0,
            count: LORD_PERIODS * 3,
            ..Skill::active()
        }
    }

    pub fn lord_basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::CROWNED_BASIC_ATTACK,
            base: 165.0,
            attack_rate: 88.0,
            hp_rate: 7.9,
            count: 3 * LORD_PERIODS,
            ..Skill::basic_attack()
        }
    }

    /// Night Vow keeps the crowned support up four times as often.
    pub fn lord_support_skill(&self, stats: &Stats) -> Skill {
        let per_period = if stats.set_card == SetCardId::NightVow { 4 } else { 1 };
        Skill {
            name: names::CROWNED_SUPPORT,
            base: 720.0,
            attack_rate: 384.0,
            hp_rate: 35.0,
            count: per_period * NORMAL_PERIODS,
            ..Skill::support()
        }
    }
}

impl Companion for KingOfDarknight {
    fn id(&self) -> CompanionId {
        CompanionId::KingOfDarknight
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Self::split_weapon_active(stats);
        }
        // hit-weighted average of the two- and three-hit strings, whole numbers for rates
        Skill {
            base: f64::from((351 * 2 + 376 * 3) / 5),
            attack_rate: f64::from((187 * 2 + 200 * 3) / 5),
            hp_rate: (16.8 * 2.0 + 18.0 * 3.0) / 5.0,
            count: 5 * NORMAL_PERIODS,
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            base: 165.0,
            attack_rate: 88.0,
            hp_rate: 7.9,
            count: 2 * NORMAL_PERIODS,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 1767.0,
            attack_rate: 942.0,
            hp_rate: 84.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 1800.0,
            attack_rate: 960.0,
            hp_rate: 86.0,
            oath_boost: stats.oath_boost,
            count: stats.oath_count(),
            ..Skill::oath()
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 364.0,
            attack_rate: 194.0,
            hp_rate: 17.0,
            count: 2 * NORMAL_PERIODS,
            ..Skill::support()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let opening = Period::new(
            vec![
                self.active_skill(stats),
                self.basic_attack(stats),
                self.resonance_skill(stats),
                self.support_skill(stats),
            ],
            0.0,
        );
        let crowned = Period::new(
            vec![
                self.lord_active_skill(stats),
                self.lord_basic_attack(stats),
                self.lord_support_skill(stats),
                self.oath_skill(stats),
            ],
            self.weaken_rate(stats) * 2.0,
        );
        CompanionFlow::phased(opening, crowned)
    }
}
