//! Farspace Colonel: fights outside, then inside, a deployed battle zone.
//! Only the signature weapon can deploy; generic weapons play a single
//! period with no weaken window.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Rotations spent outside the zone.
const OUTSIDE_PERIODS: u32 = 2;
/// Rotations spent inside the zone.
const ZONE_PERIODS: u32 = 2;

/// Damage boost inside the zone while wearing Farspace.
const FARSPACE_ZONE_BOOST: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct FarspaceColonel;

impl FarspaceColonel {
    /// Four-hit string. Six strings charge one resonance.
    pub fn light_attack(&self, _stats: &Stats) -> Skill {
        Skill {
            base: f64::from(47 + 70 + 68 + 85),
            attack_rate: f64::from(25 + 37 + 36 + 45),
            defense_rate: f64::from(99 + 148 + 144 + 180),
            count: 6 * OUTSIDE_PERIODS,
            ..Skill::basic_attack()
        }
    }

    /// Last two hits after each heavy or active, plus three extra strings.
    pub fn zone_light_attack(&self, _stats: &Stats) -> Skill {
        Skill {
            base: f64::from(68 + 85),
            attack_rate: f64::from(36 + 45),
            defense_rate: f64::from(144 + 180),
            count: (3 + 3) * ZONE_PERIODS,
            ..Skill::basic_attack()
        }
    }

    pub fn heavy_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::HEAVY_ATTACK,
            base: 133.0,
            attack_rate: 71.0,
            defense_rate: 281.0,
            count: 2 * ZONE_PERIODS,
            ..Skill::basic_attack()
        }
    }

    pub fn deep_strike(&self, _stats: &Stats) -> Skill {
        Skill {
            name: names::DEEP_STRIKE,
            base: 512.0,
            attack_rate: 273.0,
            defense_rate: 1082.0,
            damage_boost: 80.0,
            count: ZONE_PERIODS,
            ..Skill::resonance()
        }
    }

    /// Farspace IV only; otherwise a zero-scoring slot.
    pub fn focused_gravity_wave(&self, stats: &Stats) -> Skill {
        if !stats.set_at(SetCardId::Farspace, &[Stage::IV]) {
            return Skill::named(names::FOCUSED_GRAVITY_WAVE);
        }
        Skill {
            base: 225.0,
            attack_rate: 120.0,
            defense_rate: 476.0,
            can_crit: true,
            count: 4 * ZONE_PERIODS,
            ..Skill::named(names::FOCUSED_GRAVITY_WAVE)
        }
    }

    /// Generic-weapon oath. It never lands in a weaken window, so the oath
    /// boost is carried as plain damage.
    fn unweakened_oath(&self, stats: &Stats) -> Skill {
        Skill {
            name: names::OATH_NO_WEAKEN,
            damage_boost: stats.oath_boost,
            oath_boost: 0.0,
            ..self.oath_skill(stats)
        }
    }
}

impl Companion for FarspaceColonel {
    fn id(&self) -> CompanionId {
        CompanionId::FarspaceColonel
    }

    /// One two-part cast per six energy, rounded up.
    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = stats.energy();
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }
        Skill {
            base: 200.0 + 185.0,
            attack_rate: 105.0 + 100.0,
            defense_rate: 420.0 + 395.0,
            count: energy.div_ceil(3 * 2),
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        self.light_attack(stats)
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 245.0,
            attack_rate: 131.0,
            defense_rate: 519.0,
            count: ZONE_PERIODS,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 1440.0,
            attack_rate: 780.0,
            defense_rate: 3060.0,
            oath_boost: stats.oath_boost,
            count: stats.oath_count(),
            ..Skill::oath()
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 284.0,
            attack_rate: 151.0,
            defense_rate: 599.0,
            count: 3,
            ..Skill::support()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        if !stats.has_signature_weapon() {
            return CompanionFlow::single(Period::new(
                vec![
                    self.active_skill(stats),
                    self.heavy_attack(stats),
                    self.unweakened_oath(stats),
                    self.support_skill(stats),
                ],
                0.0,
            ));
        }

        let active = self.active_skill(stats);
        let outside_casts = active.count.saturating_sub(1);
        let zone_casts = active.count + 1;
        let outside = Period::new(
            vec![
                active.clone().with_count(outside_casts),
                self.light_attack(stats),
                self.resonance_skill(stats),
                self.support_skill(stats),
                self.passive_skill(stats),
            ],
            0.0,
        );
        let boost = if stats.set_card == SetCardId::Farspace {
            FARSPACE_ZONE_BOOST
        } else {
            0.0
        };
        let zone = Period::new(
            vec![
                active.with_count(zone_casts),
                self.heavy_attack(stats),
                self.zone_light_attack(stats),
                self.deep_strike(stats),
                self.oath_skill(stats),
                self.support_skill(stats),
                self.passive_skill(stats),
                self.focused_gravity_wave(stats),
            ],
            self.weaken_rate(stats) * 2.0,
        )
        .with_boost(boost);
        CompanionFlow::phased(outside, zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::stats::Weapon;

    #[test]
    fn zone_shifts_one_active_cast_inside() {
        let stats = stats(CompanionId::FarspaceColonel, SetCardId::Farspace, Stage::IV, Weapon::Signature);
        // 9 energy rounds up to 2 casts
        assert_eq!(FarspaceColonel.active_skill(&stats).count, 2);
        let flow = FarspaceColonel.build_flow(&stats);
        assert_eq!(flow.periods()[0].skills.get(names::ACTIVE).map(|s| s.count), Some(1));
        assert_eq!(flow.periods()[1].skills.get(names::ACTIVE).map(|s| s.count), Some(3));
        assert_eq!(flow.periods()[1].boost, 20.0);
        assert_eq!(flow.find(names::FOCUSED_GRAVITY_WAVE).map(|s| s.count), Some(8));
    }

    #[test]
    fn gravity_wave_is_a_placeholder_below_stage_four() {
        let stats = stats(CompanionId::FarspaceColonel, SetCardId::Farspace, Stage::III, Weapon::Signature);
        let wave = FarspaceColonel.focused_gravity_wave(&stats);
        assert_eq!(wave.count, 0);
        assert_eq!(wave.base, 0.0);
    }

    #[test]
    fn generic_weapon_plays_without_weaken_window() {
        let stats = stats(CompanionId::FarspaceColonel, SetCardId::Farspace, Stage::IV, Weapon::Sword);
        let flow = FarspaceColonel.build_flow(&stats);
        assert_eq!(flow.periods().len(), 1);
        assert_eq!(flow.periods()[0].weaken_rate, 0.0);
        let oath = flow.find(names::OATH_NO_WEAKEN).expect("unweakened oath");
        assert!(!oath.is_oath());
        assert_eq!(oath.damage_boost, 40.0);
        assert!(flow.find(names::OATH).is_none());
    }
}
