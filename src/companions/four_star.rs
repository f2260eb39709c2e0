//! Companions that always play a generic weapon kit.
//!
//! None of these has a signature weapon, so the active and basic attack come
//! from [weapon](crate::companions::weapon) and only resonance, support,
//! passive and the occasional rider differ.

use crate::combat::skill::{names, Skill};
use crate::companions::{standard_oath, weapon, Companion};
use crate::data::catalog::CompanionId;
use crate::data::stats::Stats;

#[derive(Debug, Clone, Copy, Default)]
pub struct Artist;

impl Companion for Artist {
    fn id(&self) -> CompanionId {
        CompanionId::Artist
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 118.0 * 5.0,
            attack_rate: 250.0 * 5.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 84.0,
            attack_rate: 112.0,
            ..Skill::support().with_count(6)
        }
    }

    fn passive_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 15.0,
            attack_rate: 20.0,
            count: 30,
            ..Skill::named(names::FIRE_TRAP)
        }
    }

    fn period_boost(&self, _stats: &Stats) -> f64 {
        5.0 * 5.0 * 0.5
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DawnBreaker;

impl Companion for DawnBreaker {
    fn id(&self) -> CompanionId {
        CompanionId::DawnBreaker
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 252.0,
            attack_rate: 336.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 626.0,
            attack_rate: 835.0,
            ..Skill::support().with_count(6)
        }
    }
}

/// Every skill carries a flat +7% crit rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepspaceHunter;

impl DeepspaceHunter {
    const CRIT_RATE: f64 = 7.0;
}

impl Companion for DeepspaceHunter {
    fn id(&self) -> CompanionId {
        CompanionId::DeepspaceHunter
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        Skill {
            crit_rate: Self::CRIT_RATE,
            ..weapon::active_skill(stats.weapon, stats.energy())
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        Skill {
            crit_rate: Self::CRIT_RATE,
            ..weapon::basic_attack(stats.weapon)
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 318.0,
            attack_rate: 424.0,
            crit_rate: Self::CRIT_RATE,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            crit_rate: Self::CRIT_RATE,
            ..standard_oath(stats)
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 330.0,
            attack_rate: 440.0,
            crit_rate: Self::CRIT_RATE,
            ..Skill::support().with_count(6)
        }
    }
}

/// Target marks trigger on every active, support and resonance hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepspacePilot;

impl Companion for DeepspacePilot {
    fn id(&self) -> CompanionId {
        CompanionId::DeepspacePilot
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 867.0,
            attack_rate: 1156.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 285.0,
            attack_rate: 381.0,
            ..Skill::support().with_count(6)
        }
    }

    fn passive_skill(&self, stats: &Stats) -> Skill {
        let triggers = self.active_skill(stats).count
            + self.support_skill(stats).count
            + self.resonance_skill(stats).count;
        Skill {
            base: 53.0 + 113.0,
            attack_rate: 70.0 + 150.0,
            count: triggers,
            ..Skill::named(names::TARGET_MARK)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DistantYouth;

impl Companion for DistantYouth {
    fn id(&self) -> CompanionId {
        CompanionId::DistantYouth
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        Skill {
            damage_boost: 30.0,
            ..weapon::active_skill(stats.weapon, stats.energy())
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 739.0,
            attack_rate: 986.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 340.0,
            attack_rate: 453.0,
            ..Skill::support().with_count(6)
        }
    }

    fn passive_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            attack_rate: 100.0,
            count: 6,
            ..Skill::named(names::SWORD_INTENT)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EvolPolice;

impl Companion for EvolPolice {
    fn id(&self) -> CompanionId {
        CompanionId::EvolPolice
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 729.0,
            attack_rate: 968.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 306.0,
            attack_rate: 408.0,
            ..Skill::support().with_count(6)
        }
    }

    fn period_boost(&self, _stats: &Stats) -> f64 {
        20.0 * 0.25
    }
}

/// Active and oath shred 20% enemy defense.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshPaint;

impl Companion for FreshPaint {
    fn id(&self) -> CompanionId {
        CompanionId::FreshPaint
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        Skill {
            enemy_defence_reduction: 20.0,
            ..weapon::active_skill(stats.weapon, stats.energy())
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 922.0,
            attack_rate: 1229.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            enemy_defence_reduction: 20.0,
            ..standard_oath(stats)
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 194.0,
            attack_rate: 258.0,
            ..Skill::support().with_count(6)
        }
    }

    fn passive_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 188.0,
            attack_rate: 250.0,
            count: self.active_skill(stats).count + 4 + 1,
            ..Skill::named(names::ROSY_HUE)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkonDoctor;

impl Companion for LinkonDoctor {
    fn id(&self) -> CompanionId {
        CompanionId::LinkonDoctor
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 296.0 + 296.0 * 1.2,
            attack_rate: 394.0 + 394.0 * 1.2,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 75.0,
            attack_rate: 100.0,
            ..Skill::support().with_count(4)
        }
    }
}

/// Refunds enough energy to act as if regen were 24 points higher.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedicOfTheArctic;

impl MedicOfTheArctic {
    const DAMAGE_BOOST: f64 = 40.0 * 8.0 / 15.0;
}

impl Companion for MedicOfTheArctic {
    fn id(&self) -> CompanionId {
        CompanionId::MedicOfTheArctic
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = stats.with_extra_energy_regen(24.0).energy() + 1;
        Skill {
            damage_boost: Self::DAMAGE_BOOST,
            // one extra break slash lands in the weaken window
            weaken_boost: 34.0,
            ..weapon::active_skill(stats.weapon, energy)
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        Skill {
            damage_boost: Self::DAMAGE_BOOST,
            ..weapon::basic_attack(stats.weapon)
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 362.0,
            attack_rate: 482.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 208.0,
            attack_rate: 275.0,
            ..Skill::support().with_count(6)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OtherworldlyVisitor;

impl Companion for OtherworldlyVisitor {
    fn id(&self) -> CompanionId {
        CompanionId::OtherworldlyVisitor
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 950.0,
            attack_rate: 1266.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 321.0,
            attack_rate: 429.0,
            ..Skill::support().with_count(4)
        }
    }

    fn period_boost(&self, _stats: &Stats) -> f64 {
        8.0 * 0.6
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PhantomOfTheSiren;

impl Companion for PhantomOfTheSiren {
    fn id(&self) -> CompanionId {
        CompanionId::PhantomOfTheSiren
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 508.0 + 254.0,
            attack_rate: 678.0 + 339.0,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        standard_oath(stats)
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 218.0,
            attack_rate: 291.0,
            ..Skill::support().with_count(6)
        }
    }

    fn passive_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 18.0,
            attack_rate: 24.0,
            count: 5 * 6,
            ..Skill::named(names::ECHO)
        }
    }

    fn period_boost(&self, _stats: &Stats) -> f64 {
        10.0 * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::catalog::SetCardId;
    use crate::data::stats::{Stage, Weapon};

    #[test]
    fn signature_weapon_gives_generic_companions_no_kit() {
        let stats = stats(CompanionId::Artist, SetCardId::Temple, Stage::IV, Weapon::Signature);
        let flow = Artist.build_flow(&stats);
        let active = flow.find(names::ACTIVE).expect("active slot");
        assert_eq!(active.base, 0.0);
        assert_eq!(active.attack_rate, 0.0);
        assert_eq!(flow.periods()[0].boost, 12.5);
    }

    #[test]
    fn deepspace_pilot_marks_follow_trigger_counts() {
        let stats = Stats {
            energy_regen: 30.0,
            ..stats(CompanionId::DeepspacePilot, SetCardId::LoneRoad, Stage::IV, Weapon::Sword)
        };
        // 11 + 1 energy -> 4 actives, 6 supports, 4 resonances
        assert_eq!(DeepspacePilot.passive_skill(&stats).count, 14);
    }

    #[test]
    fn medic_refunds_energy_before_tiering() {
        let stats = stats(CompanionId::MedicOfTheArctic, SetCardId::Forever, Stage::II, Weapon::Staff);
        // 24 regen reaches the 10.8 tier, plus the refund cast
        let active = MedicOfTheArctic.active_skill(&stats);
        assert_eq!(active.count, 3);
        assert_eq!(active.weaken_boost, 34.0);
    }

    #[test]
    fn fresh_paint_passive_counts_actives() {
        let stats = Stats {
            energy_regen: 10.8,
            ..stats(CompanionId::FreshPaint, SetCardId::Mistsea, Stage::III, Weapon::Pistol)
        };
        assert_eq!(FreshPaint.active_skill(&stats).count, 3);
        assert_eq!(FreshPaint.passive_skill(&stats).count, 8);
        assert_eq!(FreshPaint.oath_skill(&stats).enemy_defence_reduction, 20.0);
    }

    #[test]
    fn deepspace_hunter_adds_crit_everywhere() {
        let stats = stats(CompanionId::DeepspaceHunter, SetCardId::NightVow, Stage::I, Weapon::Sword);
        let flow = DeepspaceHunter.build_flow(&stats);
        for name in [names::SWORD_ACTIVE, names::BASIC_ATTACK, names::RESONANCE, names::SUPPORT] {
            assert_eq!(flow.find(name).map(|s| s.crit_rate), Some(7.0), "{name}");
        }
    }
}
