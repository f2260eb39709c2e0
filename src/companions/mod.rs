//! Companion rotation strategies.
//!
//! Each companion implements [Companion]: per-slot skill builders plus
//! [Companion::build_flow], which assembles them into a [CompanionFlow].
//! The provided methods describe the generic kit; companions override only
//! the slots their kit changes. Strategies are unit structs looked up by
//! [CompanionId] through [companion_for].

pub mod abysm_sovereign;
pub mod abyss_walker;
pub mod farspace_colonel;
pub mod foreseer;
pub mod four_star;
pub mod god_of_annihilation;
pub mod god_of_the_tides;
pub mod king_of_darknight;
pub mod lemurian_sea_god;
pub mod light_seeker;
pub mod lumiere;
pub mod master_of_fate;
pub mod relentless_conqueror;
pub mod silverwing_fiend;
pub mod ultimate_weapon_x02;
pub mod weapon;

use crate::combat::skill::{CompanionFlow, Period, Skill};
use crate::data::catalog::CompanionId;
use crate::data::stats::Stats;

pub trait Companion: Sync {
    fn id(&self) -> CompanionId;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    fn active_skill(&self, stats: &Stats) -> Skill {
        weapon::active_skill(stats.weapon, stats.energy())
    }

    fn basic_attack(&self, stats: &Stats) -> Skill {
        weapon::basic_attack(stats.weapon)
    }

    fn resonance_skill(&self, _stats: &Stats) -> Skill {
        Skill::resonance()
    }

    fn oath_skill(&self, stats: &Stats) -> Skill {
        Skill {
            oath_boost: stats.oath_boost,
            count: stats.oath_count(),
            ..Skill::oath()
        }
    }

    fn support_skill(&self, _stats: &Stats) -> Skill {
        Skill::support().with_count(6)
    }

    fn passive_skill(&self, _stats: &Stats) -> Skill {
        Skill::passive()
    }

    fn weaken_rate(&self, stats: &Stats) -> f64 {
        stats.weaken_rate()
    }

    /// Flat damage boost held for the whole rotation.
    fn period_boost(&self, _stats: &Stats) -> f64 {
        0.0
    }

    /// One period holding all six slots.
    fn build_flow(&self, stats: &Stats) -> CompanionFlow {
        let skills = vec![
            self.active_skill(stats),
            self.basic_attack(stats),
            self.resonance_skill(stats),
            self.oath_skill(stats),
            self.support_skill(stats),
            self.passive_skill(stats),
        ];
        CompanionFlow::single(
            Period::new(skills, self.weaken_rate(stats)).with_boost(self.period_boost(stats)),
        )
    }
}

/// Generic kit for companions the ruleset does not model.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompanion;

impl Companion for DefaultCompanion {
    fn id(&self) -> CompanionId {
        CompanionId::Default
    }
}

pub fn companion_for(id: CompanionId) -> &'static dyn Companion {
    use CompanionId::*;
    match id {
        KingOfDarknight => &king_of_darknight::KingOfDarknight,
        Lumiere => &lumiere::Lumiere,
        LightSeeker => &light_seeker::LightSeeker,
        DistantYouth => &four_star::DistantYouth,
        EvolPolice => &four_star::EvolPolice,
        DeepspaceHunter => &four_star::DeepspaceHunter,
        GodOfAnnihilation => &god_of_annihilation::GodOfAnnihilation,
        MasterOfFate => &master_of_fate::MasterOfFate,
        Foreseer => &foreseer::Foreseer,
        MedicOfTheArctic => &four_star::MedicOfTheArctic,
        DawnBreaker => &four_star::DawnBreaker,
        LinkonDoctor => &four_star::LinkonDoctor,
        LemurianSeaGod => &lemurian_sea_god::LemurianSeaGod,
        GodOfTheTides => &god_of_the_tides::GodOfTheTides,
        AbyssWalker => &abyss_walker::AbyssWalker,
        FreshPaint => &four_star::FreshPaint,
        PhantomOfTheSiren => &four_star::PhantomOfTheSiren,
        Artist => &four_star::Artist,
        SilverwingFiend => &silverwing_fiend::SilverwingFiend,
        AbysmSovereign => &abysm_sovereign::AbysmSovereign,
        RelentlessConqueror => &relentless_conqueror::RelentlessConqueror,
        OtherworldlyVisitor => &four_star::OtherworldlyVisitor,
        UltimateWeaponX02 => &ultimate_weapon_x02::UltimateWeaponX02,
        FarspaceColonel => &farspace_colonel::FarspaceColonel,
        DeepspacePilot => &four_star::DeepspacePilot,
        Default => &DefaultCompanion,
    }
}

/// Oath shared by most non-limited companions.
pub(crate) fn standard_oath(stats: &Stats) -> Skill {
    Skill {
        base: 1200.0,
        attack_rate: 1600.0,
        oath_boost: stats.oath_boost,
        count: stats.oath_count(),
        ..Skill::oath()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::catalog::{CompanionId, SetCardId};
    use crate::data::stats::{Matching, Stage, Stats, Weapon};

    pub fn stats(companion: CompanionId, set_card: SetCardId, stage: Stage, weapon: Weapon) -> Stats {
        Stats {
            attack: 11200,
            hp: 210000,
            defense: 5045,
            matching: Matching::Favorable,
            matching_buff: 20.0,
            crit_rate: 65.0,
            crit_dmg: 300.0,
            weaken_boost: 90.0,
            oath_boost: 40.0,
            total_level: 300,
            companion,
            set_card,
            stage,
            weapon,
            ..Stats::default()
        }
    }
}
