//! Foreseer: six-hit actives and the sin of eternity passive, which Forever
//! fires far more often.

use crate::combat::skill::{names, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

#[derive(Debug, Clone, Copy, Default)]
pub struct Foreseer;

impl Companion for Foreseer {
    fn id(&self) -> CompanionId {
        CompanionId::Foreseer
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = stats.energy();
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }
        Skill {
            base: 52.0,
            attack_rate: 28.0,
            defense_rate: 111.0,
            count: energy.saturating_sub(8) * 6,
            ..Skill::active()
        }
    }

    /// Light attacks only reach full strength once the kit is fully awakened.
    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            base: 167.0,
            attack_rate: 89.0,
            defense_rate: 353.0,
            count: 25,
            damage_boost: if stats.stage == Stage::IV { 0.0 } else { -20.0 },
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 790.0,
            attack_rate: 421.0,
            defense_rate: 1670.0,
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
        Skill::support()
    }

    /// Sin of eternity. Generic-weapon actives consume some of its triggers.
    fn passive_skill(&self, stats: &Stats) -> Skill {
        let mut count: u32 = 12;
        if stats.set_card == SetCardId::Forever {
            count += match stats.stage {
                Stage::IV => 24,
                Stage::II | Stage::III => 4,
                Stage::I | Stage::None => 0,
            };
        }
        if !stats.has_signature_weapon() {
            count = count.saturating_sub(self.active_skill(stats).count);
        }
        Skill {
            base: 198.0,
            attack_rate: 102.0,
            defense_rate: 406.0,
            count,
            can_crit: true,
            ..Skill::named(names::SIN_OF_ETERNITY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::stats::Weapon;

    #[test]
    fn forever_stage_scales_sin_of_eternity() {
        let mut stats = stats(CompanionId::Foreseer, SetCardId::Forever, Stage::IV, Weapon::Signature);
        assert_eq!(Foreseer.passive_skill(&stats).count, 36);
        stats.stage = Stage::III;
        assert_eq!(Foreseer.passive_skill(&stats).count, 16);
        stats.stage = Stage::I;
        assert_eq!(Foreseer.passive_skill(&stats).count, 12);
    }

    #[test]
    fn generic_weapon_actives_eat_passive_triggers() {
        let stats = Stats {
            energy_regen: 10.8,
            ..stats(CompanionId::Foreseer, SetCardId::Forever, Stage::II, Weapon::Pistol)
        };
        assert_eq!(Foreseer.active_skill(&stats).count, 2);
        assert_eq!(Foreseer.passive_skill(&stats).count, 16 - 2);
    }

    #[test]
    fn light_attack_penalty_lifts_at_stage_four() {
        let stats = stats(CompanionId::Foreseer, SetCardId::Forever, Stage::III, Weapon::Signature);
        assert_eq!(Foreseer.basic_attack(&stats).damage_boost, -20.0);
        let four = Stats {
            stage: Stage::IV,
            ..stats
        };
        assert_eq!(Foreseer.basic_attack(&four).damage_boost, 0.0);
        assert_eq!(Foreseer.active_skill(&four).count, 6);
    }
}
