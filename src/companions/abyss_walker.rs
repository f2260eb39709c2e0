//! Abyss Walker: burn stacks from every active and a pair of power slashes
//! per rotation, with a crit rider while potential is full.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Burn ticks per active cast and per support cast.
const BURN_TICKS: u32 = 7;

#[derive(Debug, Clone, Copy, Default)]
pub struct AbyssWalker;

impl AbyssWalker {
    /// 15% crit for 5 seconds twice a minute, plus 2% from the signature
    /// weapon's basic-attack passive. Whole percent.
    fn extra_crit_rate(&self, stats: &Stats) -> f64 {
        let mut crit = 2 + 15 * 2 * 5 / 60;
        if !stats.has_signature_weapon() {
            crit -= 2;
        }
        f64::from(crit)
    }

    pub fn burn(&self, stats: &Stats) -> Skill {
        let mut count = 4 * BURN_TICKS;
        if stats.has_signature_weapon() {
            count += self.active_skill(stats).count * BURN_TICKS;
        }
        Skill {
            base: 23.0,
            attack_rate: 31.0,
            count,
            ..Skill::named(names::BURN)
        }
    }

    pub fn power_slash(&self, stats: &Stats) -> Skill {
        let mut count = 2;
        if stats.set_at(SetCardId::DeepSea, &[Stage::IV]) {
            count += 2;
        }
        Skill {
            base: 540.0,
            attack_rate: 720.0,
            count,
            crit_rate: self.extra_crit_rate(stats),
            can_crit: true,
            ..Skill::named(names::POWER_SLASH)
        }
    }
}

impl Companion for AbyssWalker {
    fn id(&self) -> CompanionId {
        CompanionId::AbyssWalker
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let energy = stats.energy();
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }
        let bonus = if stats.set_at(SetCardId::DeepSea, &[Stage::III, Stage::IV]) {
            2
        } else {
            0
        };
        Skill {
            base: 309.0,
            attack_rate: 412.0,
            count: energy.saturating_sub(8) + bonus,
            crit_rate: self.extra_crit_rate(stats),
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Skill {
            base: 144.0,
            attack_rate: 192.0,
            count: 35,
            crit_rate: self.extra_crit_rate(stats),
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 785.0,
            attack_rate: 1047.0,
            crit_rate: self.extra_crit_rate(stats),
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
            base: 264.0,
            attack_rate: 352.0,
            count: 4,
            ..Skill::support()
        }
    }

    /// Attack gained while potential refills.
    fn period_boost(&self, _stats: &Stats) -> f64 {
        8.0 * 0.7
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let skills = vec![
            self.active_skill(stats),
            self.basic_attack(stats),
            self.resonance_skill(stats),
            self.oath_skill(stats),
            self.support_skill(stats),
            self.burn(stats),
            self.power_slash(stats),
        ];
        CompanionFlow::single(
            Period::new(skills, self.weaken_rate(stats)).with_boost(self.period_boost(stats)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companions::test_support::stats;
    use crate::data::stats::Weapon;

    #[test]
    fn deep_sea_adds_casts_and_slashes() {
        let stats = stats(CompanionId::AbyssWalker, SetCardId::DeepSea, Stage::IV, Weapon::Signature);
        let flow = AbyssWalker.build_flow(&stats);
        assert_eq!(flow.find(names::ACTIVE).map(|s| s.count), Some(1 + 2));
        assert_eq!(flow.find(names::BURN).map(|s| s.count), Some(28 + 21));
        assert_eq!(flow.find(names::POWER_SLASH).map(|s| s.count), Some(4));
        assert!((flow.periods()[0].boost - 5.6).abs() < 1e-9);
    }

    #[test]
    fn crit_rider_drops_signature_share() {
        let signature = stats(CompanionId::AbyssWalker, SetCardId::DeepSea, Stage::II, Weapon::Signature);
        assert_eq!(AbyssWalker.resonance_skill(&signature).crit_rate, 4.0);
        let sword = Stats {
            weapon: Weapon::Sword,
            ..signature
        };
        assert_eq!(AbyssWalker.resonance_skill(&sword).crit_rate, 2.0);
        assert_eq!(AbyssWalker.burn(&sword).count, 28);
        assert_eq!(AbyssWalker.power_slash(&sword).count, 2);
    }
}
