//! Ultimate Weapon X-02: the rotation builds up to resonant oath casts.
//! Outside a full Lone Road set the kit runs weakened.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Scale applied to the resonant boost when weakened.
const WEAKENED_SCALE: f64 = 0.75;

#[derive(Debug, Clone, Copy, Default)]
pub struct UltimateWeaponX02;

impl UltimateWeaponX02 {
    /// True unless Lone Road is worn at stage II or above.
    pub fn weakened(stats: &Stats) -> bool {
        stats.set_card != SetCardId::LoneRoad || matches!(stats.stage, Stage::I | Stage::None)
    }

    fn resonant_boost(stats: &Stats) -> f64 {
        let boost = 5.0 / 12.0;
        if Self::weakened(stats) {
            boost * WEAKENED_SCALE
        } else {
            boost
        }
    }

    pub fn resonant_strike(&self, stats: &Stats) -> Skill {
        let awakenings = self.oath_skill(stats).count;
        Skill {
            name: names::OATH_STRIKE,
            base: 380.0,
            attack_rate: 500.0,
            count: 3 * awakenings,
            ..self.oath_skill(stats)
        }
    }
}

impl Companion for UltimateWeaponX02 {
    fn id(&self) -> CompanionId {
        CompanionId::UltimateWeaponX02
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, stats.energy());
        }
        Skill {
            base: 72.0,
            attack_rate: 96.0,
            count: 2 * 12,
            damage_boost: 20.0,
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            base: f64::from(77 + 74 + 109 + 137),
            attack_rate: f64::from(103 + 99 + 145 + 182),
            count: 3 * 2,
            damage_boost: 10.0,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, stats: &Stats) -> Skill {
        let resonance = Skill {
            base: 990.0,
            attack_rate: 1322.0,
            ..Skill::resonance()
        };
        if Self::weakened(stats) {
            let count = resonance.count - 1;
            return resonance.with_count(count);
        }
        resonance
    }

    /// Resonant awakening. Generic weapons reach it once per rotation.
    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            name: names::OATH_AWAKENING,
            base: 3800.0,
            attack_rate: 5000.0,
            damage_boost: Self::resonant_boost(stats),
            oath_boost: stats.oath_boost,
            count: if stats.has_signature_weapon() { 2 } else { 1 },
            ..Skill::oath()
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 461.0,
            attack_rate: 615.0,
            count: 4,
            damage_boost: 10.0,
            ..Skill::support()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let build_up = Period::new(
            vec![
                self.active_skill(stats),
                self.basic_attack(stats),
                self.resonance_skill(stats),
                self.support_skill(stats),
            ],
            0.0,
        );
        let resonant = Period::new(
            vec![self.oath_skill(stats), self.resonant_strike(stats)],
            self.weaken_rate(stats) * 2.0,
        );
        CompanionFlow::phased(build_up, resonant)
    }
}
