//! God of Annihilation: opening phase, then an ascended phase with stronger
//! heavy attacks, soul rift breaks and the ascended support.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

const NORMAL_PERIODS: u32 = 2;
const GOD_PERIODS: u32 = 2;

/// Ascended-phase damage boost while wearing Diviner.
const DIVINER_ASCENDED_BOOST: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct GodOfAnnihilation;

impl GodOfAnnihilation {
    pub fn heavy_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::HEAVY_ATTACK,
            base: 278.0,
            attack_rate: 148.0,
            hp_rate: 13.3,
            count: 2 * NORMAL_PERIODS,
            ..Skill::basic_attack()
        }
    }

    pub fn ascended_heavy_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::ASCENDED_HEAVY_ATTACK,
            count: 3 * NORMAL_PERIODS,
            ..self.heavy_attack(stats)
        }
    }

    /// Four feathers plus the finishing arrow.
    pub fn feather_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Skill::named(names::GOLDEN_FEATHER);
        }
        Skill {
            base: 88.0 * 4.0 + 354.0,
            attack_rate: 47.0 * 4.0 + 189.0,
            hp_rate: 34.2,
            can_crit: true,
            count: 2 * NORMAL_PERIODS,
            ..Skill::named(names::GOLDEN_FEATHER)
        }
    }

    pub fn soul_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Skill::named(names::SOUL_RIFT_BREAK);
        }
        Skill {
            base: 315.0,
            attack_rate: 168.0,
            hp_rate: 15.1,
            can_crit: true,
            count: 2 * NORMAL_PERIODS,
            ..Skill::named(names::SOUL_RIFT_BREAK)
        }
    }

    pub fn ascended_support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            name: names::ASCENDED_SUPPORT,
            base: 852.0,
            attack_rate: 456.0,
            hp_rate: 40.8,
            count: 2 * GOD_PERIODS,
            ..Skill::support()
        }
    }
}

impl Companion for GodOfAnnihilation {
    fn id(&self) -> CompanionId {
        CompanionId::GodOfAnnihilation
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            let skill = weapon::active_skill(stats.weapon, stats.energy());
            let count = skill.count / 2;
            return skill.with_count(count);
        }
        Skill {
            base: 338.0 + 389.0,
            attack_rate: 180.0 + 207.0,
            hp_rate: 34.9,
            count: NORMAL_PERIODS,
            ..Skill::active()
        }
    }

    /// Diviner IV cuts the string short after two hits but adds a third loop.
    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Skill::named(names::BASIC_ATTACK);
        }
        if stats.set_at(SetCardId::Diviner, &[Stage::IV]) {
            return Skill {
                base: 105.0 + 116.0,
                attack_rate: 56.0 + 62.0,
                hp_rate: 10.7,
                count: 3 * NORMAL_PERIODS,
                ..Skill::basic_attack()
            };
        }
        Skill {
            base: 105.0 + 116.0 + 116.0 + 147.0,
            attack_rate: 56.0 + 62.0 + 62.0 + 78.0,
            hp_rate: 23.4,
            count: 2 * NORMAL_PERIODS,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 1262.0,
            attack_rate: 674.0,
            hp_rate: 60.6,
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
            base: 98.0 + 272.0,
            attack_rate: 52.0 + 143.0,
            hp_rate: 17.8,
            count: 2 * NORMAL_PERIODS,
            ..Skill::support()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let active = self.active_skill(stats);
        let opening = Period::new(
            vec![
                active.clone(),
                self.basic_attack(stats),
                self.heavy_attack(stats),
                self.feather_attack(stats),
                self.resonance_skill(stats),
                self.support_skill(stats),
            ],
            0.0,
        );
        let boost = if stats.set_card == SetCardId::Diviner {
            DIVINER_ASCENDED_BOOST
        } else {
            0.0
        };
        let ascended = Period::new(
            vec![
                active,
                self.ascended_heavy_attack(stats),
                self.soul_attack(stats),
                self.ascended_support_skill(stats),
                self.oath_skill(stats),
            ],
            self.weaken_rate(stats) * 2.0,
        )
        .with_boost(boost);
        CompanionFlow::phased(opening, ascended)
    }
}
