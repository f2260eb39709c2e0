//! Abysm Sovereign: abyssal fury stacks decay from 74% to 46% across eight
//! casts and are spent on the active, the support and the light attacks.

use crate::combat::skill::{names, CompanionFlow, Period, Skill};
use crate::companions::{weapon, Companion};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Energy regen granted by Abyssal III and above.
const ABYSSAL_REGEN: f64 = 24.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct AbysmSovereign;

/// Slots that spend fury stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FurySlot {
    Active,
    Support,
    Light,
}

impl AbysmSovereign {
    fn empowered(stats: &Stats) -> bool {
        stats.set_at(SetCardId::Abyssal, &[Stage::III, Stage::IV])
    }

    /// Fury bonus for `slot`. Below Abyssal IV fury is up half as often;
    /// light attacks share the last seven stacks over eleven hits.
    fn fury_boost(slot: FurySlot, stats: &Stats) -> f64 {
        let full = stats.set_at(SetCardId::Abyssal, &[Stage::IV]);
        match (slot, full) {
            (FurySlot::Active, true) => 74.0,
            (FurySlot::Active, false) => 74.0 / 2.0,
            (FurySlot::Support, true) => 70.0,
            (FurySlot::Support, false) => 70.0 / 2.0,
            (FurySlot::Light, true) => (66.0 + 46.0) * 7.0 / (2.0 * 11.0),
            (FurySlot::Light, false) => (66.0 + 46.0) * 7.0 / (4.0 * 11.0),
        }
    }

    /// Second hit of the resonance. Unlike the first it can be weakened.
    pub fn resonance_second_half(&self, stats: &Stats) -> Skill {
        Skill {
            name: names::RESONANCE_SECOND_HALF,
            exempt_from_weaken_split: false,
            ..self.resonance_skill(stats)
        }
    }

    pub fn nightmare_claw_sweep(&self, stats: &Stats) -> Skill {
        Skill {
            name: names::NIGHTMARE_CLAW_SWEEP,
            base: 121.0,
            attack_rate: 64.8,
            hp_rate: 5.8,
            count: self.support_skill(stats).count * 3,
            ..Skill::support()
        }
    }
}

impl Companion for AbysmSovereign {
    fn id(&self) -> CompanionId {
        CompanionId::AbysmSovereign
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        let panel = if Self::empowered(stats) {
            stats.with_extra_energy_regen(ABYSSAL_REGEN)
        } else {
            *stats
        };
        let energy = panel.energy();
        if !stats.has_signature_weapon() {
            return weapon::active_skill(stats.weapon, energy);
        }

        let mut skill = Skill {
            base: 397.0,
            attack_rate: 212.0,
            hp_rate: 19.1,
            count: energy.saturating_sub(8),
            damage_boost: Self::fury_boost(FurySlot::Active, stats),
            ..Skill::active()
        };
        if Self::empowered(stats) {
            skill.count += 3;
        }
        if stats.set_at(SetCardId::Abyssal, &[Stage::IV]) {
            skill.base = 632.0;
            skill.attack_rate = 337.0;
            skill.hp_rate = 30.3;
        }
        skill
    }

    /// Light-attack strings, minus two hits per active cast. Generic weapons
    /// trade the weapon's own bonus for fury.
    fn basic_attack(&self, stats: &Stats) -> Skill {
        let fury = Self::fury_boost(FurySlot::Light, stats);
        if !stats.has_signature_weapon() {
            return Skill {
                damage_boost: fury,
                ..weapon::basic_attack(stats.weapon)
            };
        }
        let actives = self.active_skill(stats).count;
        Skill {
            base: 162.0,
            attack_rate: 87.0,
            hp_rate: 7.8,
            count: (11 * 4u32).saturating_sub(actives * 2),
            damage_boost: fury,
            ..Skill::basic_attack()
        }
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill {
            base: 512.0,
            attack_rate: 273.0,
            hp_rate: 24.6,
            ..Skill::resonance()
        }
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 1440.0,
            attack_rate: 780.0,
            hp_rate: 69.4,
            oath_boost: stats.oath_boost,
            count: stats.oath_count(),
            ..Skill::oath()
        }
    }

    fn support_skill(&self, stats: &Stats) -> Skill {
        Skill {
            base: 508.0,
            attack_rate: 271.0,
            hp_rate: 24.4,
            count: 6,
            damage_boost: Self::fury_boost(FurySlot::Support, stats),
            ..Skill::support()
        }
    }

    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let skills = vec![
            self.active_skill(stats),
            self.basic_attack(stats),
            self.resonance_skill(stats),
            self.resonance_second_half(stats),
            self.oath_skill(stats),
            self.support_skill(stats),
            self.nightmare_claw_sweep(stats),
            self.passive_skill(stats),
        ];
        CompanionFlow::single(Period::new(skills, self.weaken_rate(stats)))
    }
}
