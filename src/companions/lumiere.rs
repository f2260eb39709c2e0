//! Lumiere: moonlight strikes follow almost every hit. Midnight adds active
//! casts and, at IV, a haze window in which moonlight strikes four times.

use crate::combat::skill::{names, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Moonlight procs from the companion's own attacks per rotation.
const PARTNER_MOONLIGHT: u32 = 26;
/// Moonlight procs from resonance.
const RESONANCE_MOONLIGHT: u32 = 4;
/// Seconds of haze per rotation under Midnight IV (four 8 second windows).
const HAZE_SECONDS: u32 = 4 * 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct Lumiere;

impl Lumiere {
    /// Splits `procs` into clear-sky and haze shares. Haze procs hit four
    /// times. Whole-number division per share.
    fn hazed(procs: u32) -> u32 {
        procs * (60 - HAZE_SECONDS) / 60 + (procs * 8 * 4 / 60) * 4
    }
}

impl Companion for Lumiere {
    fn id(&self) -> CompanionId {
        CompanionId::Lumiere
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = stats.energy();
        let mut skill = if stats.has_signature_weapon() {
            Skill {
                base: 403.0,
                attack_rate: 215.0,
                defense_rate: 852.0,
                count: energy.saturating_sub(8),
                ..Skill::active()
            }
        } else {
            weapon::active_skill(stats.weapon, energy)
        };
        if stats.set_at(SetCardId::Midnight, &[Stage::III, Stage::IV]) {
            skill.count += 6;
        }
        if stats.set_at(SetCardId::Midnight, &[Stage::IV]) {
            skill.count += 4;
        }
        skill
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            base: 150.0,
            attack_rate: 80.0,
            defense_rate: 317.0,
            count: 35,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 686.0,
            attack_rate: 366.0,
            defense_rate: 1450.0,
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
        Skill::support().with_count(3)
    }

    fn passive_skill(&self, stats: &Stats) -> Skill {
        let actives = if stats.has_signature_weapon() {
            self.active_skill(stats).count
        } else {
            0
        };
        let heavy_procs = self.basic_attack(stats).count / 4;
        let supports = self.support_skill(stats).count;

        let count = if stats.set_at(SetCardId::Midnight, &[Stage::IV]) {
            Self::hazed(PARTNER_MOONLIGHT)
                + Self::hazed(actives)
                + heavy_procs * (60 - HAZE_SECONDS) / 60
                + RESONANCE_MOONLIGHT
        } else {
            PARTNER_MOONLIGHT + actives + supports + heavy_procs + RESONANCE_MOONLIGHT
        };
        Skill {
            base: 92.0,
            attack_rate: 49.0,
            defense_rate: 194.0,
            count,
            can_crit: true,
            ..Skill::named(names::MOONLIGHT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::stats::Weapon;

    #[test]
    fn midnight_adds_active_casts() {
        let three = stats(CompanionId::Lumiere, SetCardId::Midnight, Stage::III, Weapon::Signature);
        assert_eq!(Lumiere.active_skill(&three).count, 1 + 6);
        let four = Stats {
            stage: Stage::IV,
            ..three
        };
        assert_eq!(Lumiere.active_skill(&four).count, 1 + 10);

        let pistol = Stats {
            weapon: Weapon::Pistol,
            ..four
        };
        assert_eq!(Lumiere.active_skill(&pistol).count, 1 + 10);
    }

    #[test]
    fn moonlight_without_haze_sums_procs() {
        let stats = stats(CompanionId::Lumiere, SetCardId::Midnight, Stage::II, Weapon::Signature);
        // 26 + 0 actives + 3 supports + 35 / 4 + 4
        assert_eq!(Lumiere.passive_skill(&stats).count, 41);
    }

    #[test]
    fn moonlight_under_haze_uses_whole_number_shares() {
        let stats = stats(CompanionId::Lumiere, SetCardId::Midnight, Stage::IV, Weapon::Signature);
        // partner 12 + 52, actives (11) 5 + 20, heavy 8 * 28 / 60 = 3, resonance 4
        assert_eq!(Lumiere.passive_skill(&stats).count, 12 + 52 + 5 + 20 + 3 + 4);
    }
}
