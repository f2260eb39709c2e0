//! Lemurian Sea God: defense-scaling kit with a blessed phase full of
//! thunder. Mistsea stretches the weaken window and unlocks falling thunder.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

const NORMAL_PERIODS: u32 = 2;
const GOD_PERIODS: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct LemurianSeaGod;

impl LemurianSeaGod {
    fn split_weapon_active(stats: &Stats) -> Skill {
        let skill = weapon::active_skill(stats.weapon, stats.energy());
        let count = skill.count / 2;
        skill.with_count(count)
    }

    /// Three-hit string averaged per hit, in whole numbers.
    fn signature_basic(count: u32) -> Skill {
        Skill {
            base: f64::from((49 + 53 + 83) / 3),
            attack_rate: f64::from((26 + 28 + 44) / 3),
            defense_rate: f64::from((104 + 112 + 175) / 3),
            count,
            ..Skill::basic_attack()
        }
    }

    fn boosted_heavy(name: &'static str, count: u32) -> Skill {
        Skill {
            base: 265.0,
            attack_rate: 141.0,
            defense_rate: 560.0,
            damage_boost: 50.0,
            can_crit: true,
            count,
            ..Skill::named(name)
        }
    }

    pub fn blessed_active_skill(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Self::split_weapon_active(stats);
        }
        Skill {
            name: names::BLESSED_ACTIVE,
            count: GOD_PERIODS * 3,
            ..self.active_skill(stats)
        }
    }

    pub fn blessed_basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Self::signature_basic(9 * GOD_PERIODS).renamed(names::BLESSED_BASIC_ATTACK)
    }

    /// Weapon passive: every active primes two empowered heavy attacks.
    pub fn boosted_heavy_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Skill::named(names::WEAPON_PASSIVE_HEAVY);
        }
        let actives = self.active_skill(stats).count;
        Self::boosted_heavy(names::WEAPON_PASSIVE_HEAVY, actives * 2)
    }

    pub fn blessed_boosted_heavy_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Skill::named(names::BLESSED_WEAPON_PASSIVE_HEAVY);
        }
        Self::boosted_heavy(names::BLESSED_WEAPON_PASSIVE_HEAVY, 3 * GOD_PERIODS)
    }

    pub fn thunder_crystal(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 32.0,
            attack_rate: 17.0,
            defense_rate: 68.0,
            can_crit: true,
            count: 3 * GOD_PERIODS,
            ..Skill::named(names::THUNDER_CRYSTAL)
        }
    }

    pub fn thunder_tide(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 450.0,
            attack_rate: 240.0,
            defense_rate: 951.0,
            can_crit: true,
            count: 3 * GOD_PERIODS,
            ..Skill::named(names::THUNDER_TIDE)
        }
    }

    /// Only Mistsea II and above call down the companion's own thunder.
    pub fn falling_thunder(&self, stats: &Stats) -> Skill {
        let unlocked = stats.set_at(SetCardId::Mistsea, &[Stage::II, Stage::III, Stage::IV]);
        Skill {
            base: 270.0,
            attack_rate: 144.0,
            defense_rate: 571.0,
            can_crit: true,
            count: if unlocked { 10 * GOD_PERIODS } else { 0 },
            ..Skill::named(names::FALLING_THUNDER)
        }
    }
}

impl Companion for LemurianSeaGod {
    fn id(&self) -> CompanionId {
        CompanionId::LemurianSeaGod
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return Self::split_weapon_active(stats);
        }
        Skill {
            base: 312.0,
            attack_rate: 166.0,
            defense_rate: 660.0,
            count: NORMAL_PERIODS,
            ..Skill::active()
        }
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        if !stats.has_signature_weapon() {
            return weapon::basic_attack(stats.weapon);
        }
        Self::signature_basic(6 * NORMAL_PERIODS)
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 1311.0,
            attack_rate: 699.0,
            defense_rate: 2773.0,
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
            base: 360.0,
            attack_rate: 192.0,
            defense_rate: 761.0,
            count: 4,
            ..Skill::support()
        }
    }

    fn weaken_rate(&self, stats: &Stats) -> f64 {
        if stats.set_card == SetCardId::Mistsea {
            stats.weaken_rate() * 1.1
        } else {
            stats.weaken_rate()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let opening = Period::new(
            vec![
                self.active_skill(stats),
                self.basic_attack(stats),
                self.boosted_heavy_attack(stats),
                self.resonance_skill(stats),
                self.support_skill(stats),
            ],
            0.0,
        );
        let blessed = Period::new(
            vec![
                self.blessed_active_skill(stats),
                self.blessed_basic_attack(stats),
                self.blessed_boosted_heavy_attack(stats),
                self.oath_skill(stats),
                self.thunder_crystal(stats),
                self.thunder_tide(stats),
                self.falling_thunder(stats),
            ],
            self.weaken_rate(stats),
        );
        CompanionFlow::phased(opening, blessed)
    }
}
