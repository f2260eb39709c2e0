//! Light Seeker: double-cast actives echoed by lightchase resonance, fought
//! inside a lightchase field.

use crate::combat::skill::{names, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::CompanionId;
use crate::data::stats::Stats;

#[derive(Debug, Clone, Copy, Default)]
pub struct LightSeeker;

impl LightSeeker {
    /// Four of every five actives trigger an echo.
    pub fn lightchase_resonance(&self, stats: &Stats) -> Skill {
        let actives = self.active_skill(stats).count;
        Skill {
            base: 150.0,
            attack_rate: 200.0,
            count: actives * 4 / 5,
            can_crit: true,
            ..Skill::named(names::LIGHTCHASE_RESONANCE)
        }
    }
}

impl Companion for LightSeeker {
    fn id(&self) -> CompanionId {
        CompanionId::LightSeeker
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = stats.energy();
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }
        Skill {
            base: 341.0,
            attack_rate: 455.0,
            count: energy.saturating_sub(8) * 2,
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::HEAVY_ATTACK,
            base: 118.0,
            attack_rate: 157.0,
            count: 30,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 641.0,
            attack_rate: 854.0,
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
            base: 400.0,
            attack_rate: 400.0,
            count: 6,
            ..Skill::support()
        }
    }

    fn passive_skill(&self, stats: &Stats) -> Skill {
        self.lightchase_resonance(stats)
    }

    /// 10% attack inside the field plus 20% after a shield break.
    fn period_boost(&self, _stats: &Stats) -> f64 {
        21.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::catalog::SetCardId;
    use crate::data::stats::{Stage, Weapon};

    #[test]
    fn echoes_follow_active_casts() {
        let stats = Stats {
            energy_regen: 39.6,
            ..stats(CompanionId::LightSeeker, SetCardId::LightSeeking, Stage::IV, Weapon::Signature)
        };
        let flow = LightSeeker.build_flow(&stats);
        assert_eq!(flow.find(names::ACTIVE).map(|s| s.count), Some(10));
        assert_eq!(flow.find(names::LIGHTCHASE_RESONANCE).map(|s| s.count), Some(8));
        assert_eq!(flow.periods()[0].boost, 21.0);
    }

    #[test]
    fn generic_weapon_swaps_heavy_for_weapon_basic() {
        let stats = stats(CompanionId::LightSeeker, SetCardId::LightSeeking, Stage::II, Weapon::Greatsword);
        let flow = LightSeeker.build_flow(&stats);
        assert!(flow.find(names::HEAVY_ATTACK).is_none());
        assert_eq!(flow.find(names::BASIC_ATTACK).map(|s| s.count), Some(11));
        assert_eq!(flow.find(names::LIGHTCHASE_RESONANCE).map(|s| s.count), Some(0));
    }
}
