//! Master of Fate: jade breaker strikes fed by actives, supports and
//! piercing rain. Snowfall stretches the weaken window and refunds energy.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Jade breakers triggered by the companion itself (5) and by normal attacks (6).
const FLAT_JADE_BREAKERS: u32 = 5 + 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct MasterOfFate;

impl MasterOfFate {
    pub fn piercing_rain(&self, stats: &Stats) -> Skill {
        Skill {
            base: 205.0,
            attack_rate: 273.0,
            count: if stats.has_signature_weapon() { 3 * 4 } else { 0 },
            can_crit: true,
            ..Skill::named(names::PIERCING_RAIN)
        }
    }

    /// One jade breaker per three charges; each active grants four.
    pub fn jade_breaker(&self, stats: &Stats) -> Skill {
        let charges = self.active_skill(stats).count * 4
            + self.support_skill(stats).count
            + self.piercing_rain(stats).count;
        Skill {
            base: 233.0,
            attack_rate: 310.0,
            count: charges / 3 + FLAT_JADE_BREAKERS,
            can_crit: true,
            ..Skill::named(names::JADE_BREAKER)
        }
    }
}

impl Companion for MasterOfFate {
    fn id(&self) -> CompanionId {
        CompanionId::MasterOfFate
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let mut energy = stats.energy();
        if stats.set_at(SetCardId::Snowfall, &[Stage::III, Stage::IV]) {
            energy += 2;
        }
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }
        Skill {
            base: 404.0,
            attack_rate: 539.0,
            count: energy.saturating_sub(8),
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            base: 141.0,
            attack_rate: 188.0,
            count: 30,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 632.0,
            attack_rate: 842.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 1440.0,
            attack_rate: 1920.0,
            oath_boost: stats.oath_boost,
            count: stats.oath_count(),
            ..Skill::oath()
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 260.0,
            attack_rate: 348.0,
            count: 6,
            ..Skill::support()
        }
    }

    fn weaken_rate(&self, stats: &Stats) -> f64 {
        if stats.set_at(SetCardId::Snowfall, &[Stage::II, Stage::III, Stage::IV]) {
            stats.weaken_rate() * 1.1
        } else {
            stats.weaken_rate()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let skills = vec![
            self.active_skill(stats),
            self.basic_attack(stats),
            self.resonance_skill(stats),
            self.oath_skill(stats),
            self.support_skill(stats),
            self.jade_breaker(stats),
            self.piercing_rain(stats),
        ];
        CompanionFlow::single(Period::new(skills, self.weaken_rate(stats)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::stats::Weapon;

    #[test]
    fn snowfall_refunds_energy_and_widens_weaken() {
        let stats = stats(CompanionId::MasterOfFate, SetCardId::Snowfall, Stage::III, Weapon::Signature);
        let flow = MasterOfFate.build_flow(&stats);
        assert!((flow.periods()[0].weaken_rate - 0.55).abs() < 1e-12);
        // 9 energy + 2
        assert_eq!(flow.find(names::ACTIVE).map(|s| s.count), Some(3));
        // (12 + 6 + 12) / 3 + 11
        assert_eq!(flow.find(names::JADE_BREAKER).map(|s| s.count), Some(21));
        assert_eq!(flow.find(names::PIERCING_RAIN).map(|s| s.count), Some(12));
    }

    #[test]
    fn snowfall_one_keeps_base_weaken() {
        let stats = stats(CompanionId::MasterOfFate, SetCardId::Snowfall, Stage::I, Weapon::Signature);
        assert_eq!(MasterOfFate.weaken_rate(&stats), 0.5);
    }

    #[test]
    fn generic_weapon_loses_piercing_rain() {
        let stats = stats(CompanionId::MasterOfFate, SetCardId::Snowfall, Stage::IV, Weapon::Sword);
        assert_eq!(MasterOfFate.piercing_rain(&stats).count, 0);
        // sword active casts 3 times: (12 + 6) / 3 + 11
        assert_eq!(MasterOfFate.jade_breaker(&stats).count, 17);
    }
}
