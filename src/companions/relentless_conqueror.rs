//! Relentless Conqueror: heavy-attack kit whose plunder windows boost the
//! whole rotation. Captivating keeps the window up permanently.

use crate::combat::skill::{names, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Damage bonus while a plunder window is open.
const PLUNDER_BOOST: f64 = 80.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct RelentlessConqueror;

impl RelentlessConqueror {
    /// Marks applied every 8 seconds across two minutes. Captivating IV only.
    pub fn plunder_mark(&self, stats: &Stats) -> Skill {
        let count = if stats.set_at(SetCardId::Captivating, &[Stage::IV]) {
            60 * 2 / 8
        } else {
            0
        };
        Skill {
            base: 60.0,
            attack_rate: 80.0,
            count,
            can_crit: true,
            ..Skill::named(names::PLUNDER_MARK)
        }
    }
}

impl Companion for RelentlessConqueror {
    fn id(&self) -> CompanionId {
        CompanionId::RelentlessConqueror
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = stats.energy();
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }
        Skill {
            base: 342.0,
            attack_rate: 456.0,
            count: energy.saturating_sub(8),
            damage_boost: 10.0 / (10.0 - 6.0 * 0.5),
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            name: names::HEAVY_ATTACK,
            base: 160.0,
            attack_rate: 213.0,
            count: 20,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 1094.0,
            attack_rate: 1458.0,
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
            base: 239.0,
            attack_rate: 318.0,
            count: 6,
            ..Skill::support()
        }
    }

    fn passive_skill(&self, stats: &Stats) -> Skill {
        self.plunder_mark(stats)
    }

    /// Four 8 second plunder windows a minute, or always on with Captivating.
    fn period_boost(&self, stats: &Stats) -> f64 {
        if stats.set_card == SetCardId::Captivating && stats.stage != Stage::I {
            PLUNDER_BOOST
        } else {
            (4.0 * 8.0 / 60.0) * PLUNDER_BOOST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::stats::Weapon;

    #[test]
    fn captivating_keeps_plunder_window_open() {
        let stats = stats(CompanionId::RelentlessConqueror, SetCardId::Captivating, Stage::II, Weapon::Signature);
        let flow = RelentlessConqueror.build_flow(&stats);
        assert_eq!(flow.periods()[0].boost, 80.0);
        assert_eq!(flow.find(names::PLUNDER_MARK).map(|s| s.count), Some(0));

        let one = Stats {
            stage: Stage::I,
            ..stats
        };
        let boost = RelentlessConqueror.period_boost(&one);
        assert!((boost - 32.0 / 60.0 * 80.0).abs() < 1e-9);
    }

    #[test]
    fn plunder_marks_need_captivating_four() {
        let stats = stats(CompanionId::RelentlessConqueror, SetCardId::Captivating, Stage::IV, Weapon::Signature);
        assert_eq!(RelentlessConqueror.plunder_mark(&stats).count, 15);
        assert_eq!(RelentlessConqueror.active_skill(&stats).count, 1);
        assert!((RelentlessConqueror.active_skill(&stats).damage_boost - 10.0 / 7.0).abs() < 1e-12);
    }
}
