//! God of the Tides: rain windows boost the whole rotation and empower sea
//! spirits. Temple raises the number of rain windows with its stage.

use crate::combat::skill::{names, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Sea spirits summoned per active or support cast.
const SPIRITS_PER_CAST: u32 = 7;
const SIGNATURE_ACTIVE_CAP: u32 = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct GodOfTheTides;

impl GodOfTheTides {
    pub fn rain_count(&self, stats: &Stats) -> u32 {
        if stats.set_card != SetCardId::Temple {
            return 1;
        }
        match stats.stage {
            Stage::IV => 4,
            Stage::III => 3,
            Stage::II => 2,
            Stage::I | Stage::None => 1,
        }
    }

    fn energy(&self, stats: &Stats) -> u32 {
        let mut energy = stats.energy();
        if stats.set_at(SetCardId::Temple, &[Stage::III, Stage::IV]) {
            energy += 2 * self.rain_count(stats);
        }
        energy
    }

    /// Each active grants 30% crit rate for 6 of the rotation's 60 seconds.
    fn extra_crit_rate(&self, stats: &Stats) -> f64 {
        if !stats.has_signature_weapon() {
            return 0.0;
        }
        let actives = self.active_skill(stats).count;
        f64::from(30 * actives * 6 / 60)
    }
}

impl Companion for GodOfTheTides {
    fn id(&self) -> CompanionId {
        CompanionId::GodOfTheTides
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = self.energy(stats);
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }
        let count = energy.saturating_sub(8).min(SIGNATURE_ACTIVE_CAP);
        Skill {
            base: 73.0,
            attack_rate: 39.0,
            hp_rate: 3.5,
            count,
            crit_rate: 30.0 * f64::from(count) * 6.0 / 60.0,
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            base: 182.0,
            attack_rate: 97.0,
            hp_rate: 9.0,
            count: 30,
            crit_rate: self.extra_crit_rate(stats),
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 995.0,
            attack_rate: 531.0,
            hp_rate: 47.8,
            crit_rate: self.extra_crit_rate(stats),
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 1440.0,
            attack_rate: 780.0,
            hp_rate: 69.4,
            oath_boost: stats.oath_boost,
            count: stats.oath_count(),
            ..Skill::oath()
        }
    }

    fn passive_skill(&self, stats: &Stats) -> Skill {
        let actives = if stats.has_signature_weapon() {
            self.active_skill(stats).count
        } else {
            0
        };
        let supports = self.support_skill(stats).count;
        let rain_share = f64::from(self.rain_count(stats)) / 6.0;
        Skill {
            base: 47.0,
            attack_rate: 25.0,
            hp_rate: 2.2,
            count: (actives + supports) * SPIRITS_PER_CAST,
            // spirits upgrade while it rains
            damage_boost: (rain_share * 1.25 + 5.0 / 6.0) * 100.0 / 6.0,
            crit_rate: self.extra_crit_rate(stats),
            can_crit: true,
            ..Skill::named(names::SEA_SPIRIT)
        }
    }

    /// Rain grants 30% damage for 10 seconds per window.
    fn period_boost(&self, stats: &Stats) -> f64 {
        30.0 * (f64::from(self.rain_count(stats)) / 6.0)
    }
}
