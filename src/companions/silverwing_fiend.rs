//! Silverwing Fiend: defense-scaling kit. The opening phase plants rose
//! thorns; the blood oath phase detonates them through the veil lattice.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::Stats;

const NORMAL_PERIODS: u32 = 2;
const BLOOD_PERIODS: u32 = 2;

/// Blooming-rose damage boost shared by the signature heavy attacks.
const ROSE_BOOST: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SilverwingFiend;

impl SilverwingFiend {
    fn split_weapon_active(stats: &Stats) -> Skill {
        let skill = weapon::active_skill(stats.weapon, stats.energy());
        let count = skill.count / 2;
        skill.with_count(count)
    }

    /// Blood oath replaces the active with an eight-hit rose rain.
    pub fn rose_rain(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Self::split_weapon_active(stats);
        }
        Skill {
            name: names::ROSE_RAIN,
            base: 45.0 * 8.0,
            attack_rate: 24.0 * 8.0,
            defense_rate: 95.0 * 8.0,
            damage_boost: ROSE_BOOST,
            count: BLOOD_PERIODS,
            ..Skill::active()
        }
    }

    /// Charged heavy attack with its lead-in basic hit.
    pub fn heavy_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::HEAVY_ATTACK,
            base: 180.0 + 49.0,
            attack_rate: 96.0 + 26.0,
            defense_rate: 381.0 + 103.0,
            damage_boost: ROSE_BOOST,
            count: 7 * NORMAL_PERIODS,
            ..Skill::basic_attack()
        }
    }

    pub fn blood_oath_heavy_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::BLOOD_OATH_HEAVY_ATTACK,
            base: 180.0,
            attack_rate: 96.0,
            defense_rate: 381.0,
            damage_boost: ROSE_BOOST,
            count: BLOOD_PERIODS,
            ..Skill::basic_attack()
        }
    }

    /// Second-phase resonance. Two detonated roses add 60% damage, and it
    /// can land inside the weaken window.
    pub fn veil_lattice(&self, stats: &Stats) -> Skill {
        let mut damage_boost = 60.0;
        if stats.has_signature_weapon() {
            damage_boost += ROSE_BOOST;
        }
        Skill {
            name: names::VEIL_LATTICE,
            base: 1458.0,
            attack_rate: 778.0,
            defense_rate: 3084.0,
            damage_boost,
            count: BLOOD_PERIODS,
            exempt_from_weaken_split: false,
            ..Skill::resonance()
        }
    }

    pub fn blood_break(&self, _stats: &Stats) -> Skill {
        Skill {
            name: names::BLOOD_BREAK,
            base: 628.0,
            attack_rate: 335.0,
            defense_rate: 1327.0,
            count: 2 * BLOOD_PERIODS,
            ..Skill::support()
        }
    }

    fn thorns(name: &'static str, count: u32) -> Skill {
        Skill {
            base: 675.0,
            attack_rate: 360.0,
            defense_rate: 1427.0,
            can_crit: true,
            count,
            ..Skill::named(name)
        }
    }

    pub fn rose_thorns(&self, _stats: &Stats) -> Skill {
        Self::thorns(names::ROSE_THORNS, 2 * NORMAL_PERIODS)
    }

    pub fn blood_oath_rose_thorns(&self, _stats: &Stats) -> Skill {
        Self::thorns(names::BLOOD_OATH_ROSE_THORNS, 3 * BLOOD_PERIODS)
    }

    /// Crimson Rapture fires a bullet after the heavy attack, each of the
    /// three thorns and the veil lattice.
    pub fn blood_rose_bullet(&self, stats: &Stats) -> Skill {
        let count = if stats.set_card == SetCardId::CrimsonRapture {
            6 * BLOOD_PERIODS
        } else {
            0
        };
        Skill {
            base: 79.0,
            attack_rate: 42.0,
            defense_rate: 168.0,
            can_crit: true,
            damage_boost: ROSE_BOOST,
            count,
            ..Skill::named(names::BLOOD_ROSE_BULLET)
        }
    }
}

impl Companion for SilverwingFiend {
    fn id(&self) -> CompanionId {
        CompanionId::SilverwingFiend
    }

    /// The signature kit spends its opening energy on thorns instead.
    fn active_skill(&self, stats: &Stats) -> Skill {
        if stats.has_signature_weapon() {
            return Skill::active().with_count(0);
        }
        Self::split_weapon_active(stats)
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 1663.0,
            attack_rate: 887.0,
            defense_rate: 3515.0,
            count: NORMAL_PERIODS,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 1800.0,
            attack_rate: 960.0,
            defense_rate: 3820.0,
            oath_boost: stats.oath_boost,
            count: stats.oath_count(),
            ..Skill::oath()
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 584.0,
            attack_rate: 311.0,
            defense_rate: 1244.0,
            count: NORMAL_PERIODS,
            ..Skill::support()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let opening = Period::new(
            vec![
                self.active_skill(stats),
                self.heavy_attack(stats),
                self.resonance_skill(stats),
                self.support_skill(stats),
                self.rose_thorns(stats),
            ],
            0.0,
        );
        let blood_oath = Period::new(
            vec![
                self.rose_rain(stats),
                self.blood_oath_heavy_attack(stats),
                self.veil_lattice(stats),
                self.blood_break(stats),
                self.blood_oath_rose_thorns(stats),
                self.blood_rose_bullet(stats),
                self.oath_skill(stats),
            ],
            self.weaken_rate(stats) * 2.0,
        );
        CompanionFlow::phased(opening, blood_oath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::stats::{Stage, Weapon};

    #[test]
    fn signature_opening_skips_active() {
        let stats = stats(CompanionId::SilverwingFiend, SetCardId::CrimsonRapture, Stage::IV, Weapon::Signature);
        let flow = SilverwingFiend.build_flow(&stats);
        assert_eq!(flow.find(names::ACTIVE).map(|s| s.count), Some(0));
        assert_eq!(flow.find(names::HEAVY_ATTACK).map(|s| s.count), Some(14));
        assert_eq!(flow.find(names::ROSE_RAIN).map(|s| s.defense_rate), Some(760.0));
        assert_eq!(flow.periods()[1].weaken_rate, 1.0);
    }

    #[test]
    fn veil_lattice_joins_weaken_window() {
        let stats = stats(CompanionId::SilverwingFiend, SetCardId::CrimsonRapture, Stage::IV, Weapon::Signature);
        let veil = SilverwingFiend.veil_lattice(&stats);
        assert!(!veil.exempt_from_weaken_split);
        assert_eq!(veil.damage_boost, 75.0);

        let pistol = Stats {
            weapon: Weapon::Pistol,
            ..stats
        };
        assert_eq!(SilverwingFiend.veil_lattice(&pistol).damage_boost, 60.0);
    }

    #[test]
    fn bullets_need_crimson_rapture() {
        let crimson = stats(CompanionId::SilverwingFiend, SetCardId::CrimsonRapture, Stage::I, Weapon::Signature);
        assert_eq!(SilverwingFiend.blood_rose_bullet(&crimson).count, 12);
        let other = Stats {
            set_card: SetCardId::FourStar,
            ..crimson
        };
        assert_eq!(SilverwingFiend.blood_rose_bullet(&other).count, 0);
    }

    #[test]
    fn generic_weapon_swaps_heavies_for_weapon_basic() {
        let stats = Stats {
            energy_regen: 39.6,
            ..stats(CompanionId::SilverwingFiend, SetCardId::CrimsonRapture, Stage::IV, Weapon::Staff)
        };
        let flow = SilverwingFiend.build_flow(&stats);
        assert!(flow.find(names::ROSE_RAIN).is_none());
        assert!(flow.find(names::BLOOD_OATH_HEAVY_ATTACK).is_none());
        let actives: Vec<_> = flow
            .skills()
            .filter(|s| s.name == names::STAFF_ACTIVE)
            .map(|s| s.count)
            .collect();
        // 13 energy, 5 casts split per phase
        assert_eq!(actives, vec![2, 2]);
    }
}
