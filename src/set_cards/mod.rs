//! Set-card buff tables.
//!
//! Every set card is a static [SetCardTable]: one slice of buff entries per
//! stage, plus the home companion that unlocks its specialised entries.
//! Other companions wearing a specialised card fall back to [DEFAULT], a
//! flat all-skills damage boost. Four Star has no home and No Set grants
//! nothing.

mod caleb;
mod rafayel;
mod sylus;
mod xavier;
mod zayne;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::combat::buffs::{BuffTarget, SkillBuff, StageBuff};
use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Stage, Stats};

/// Version tag of the compiled-in balance data (skill constants and tables).
pub const RULESET_VERSION: &str = "2025.06-farspace";

/// Buff entries unlocked by one stage.
pub type BuffEntries = &'static [(BuffTarget, SkillBuff)];

#[derive(Debug)]
pub struct SetCardTable {
    pub id: SetCardId,
    /// Companion that receives the specialised entries. `None` applies the
    /// table to everyone.
    pub home: Option<CompanionId>,
    /// Stage I through IV.
    pub stages: [BuffEntries; 4],
}

impl SetCardTable {
    pub fn entries(&self, stage: Stage) -> BuffEntries {
        match stage.index() {
            Some(index) => self.stages[index],
            None => &[],
        }
    }

    pub fn stage_buff(&self, stage: Stage) -> StageBuff {
        StageBuff::from_entries(self.entries(stage))
    }

    pub fn applies_to(&self, companion: CompanionId) -> bool {
        self.home.map_or(true, |home| home == companion)
    }
}

/// Stage tables serialize as `{ id, home, stages: { I: {target: buff}, .. } }`.
impl Serialize for SetCardTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Stages<'a>(&'a [BuffEntries; 4]);

        impl Serialize for Stages<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(4))?;
                for (stage, entries) in Stage::CONCRETE.iter().zip(self.0.iter()) {
                    map.serialize_entry(stage.as_str(), &StageBuff::from_entries(entries))?;
                }
                map.end()
            }
        }

        let mut table = serializer.serialize_struct("SetCardTable", 3)?;
        table.serialize_field("id", &self.id)?;
        table.serialize_field("home", &self.home)?;
        table.serialize_field("stages", &Stages(&self.stages))?;
        table.end()
    }
}

const fn all(buff: SkillBuff) -> (BuffTarget, SkillBuff) {
    (BuffTarget::All, buff)
}

const fn skill(name: &'static str, buff: SkillBuff) -> (BuffTarget, SkillBuff) {
    (BuffTarget::Skill(name), buff)
}

/// Fallback for companions wearing another companion's card.
pub static DEFAULT: SetCardTable = SetCardTable {
    id: SetCardId::NoSet,
    home: None,
    stages: [
        &[all(SkillBuff::damage(8.0))],
        &[all(SkillBuff::damage(8.0))],
        &[all(SkillBuff::damage(8.0))],
        &[all(SkillBuff::damage(16.0))],
    ],
};

pub static FOUR_STAR: SetCardTable = SetCardTable {
    id: SetCardId::FourStar,
    home: None,
    stages: [
        &[all(SkillBuff::damage(5.0))],
        &[all(SkillBuff::damage(5.0))],
        &[all(SkillBuff::damage(5.0))],
        &[all(SkillBuff::damage(10.0))],
    ],
};

pub static NO_SET: SetCardTable = SetCardTable {
    id: SetCardId::NoSet,
    home: None,
    stages: [&[], &[], &[], &[]],
};

pub fn table_for(id: SetCardId) -> &'static SetCardTable {
    match id {
        SetCardId::NightVow => &xavier::NIGHT_VOW,
        SetCardId::Midnight => &xavier::MIDNIGHT,
        SetCardId::LightSeeking => &xavier::LIGHT_SEEKING,
        SetCardId::Diviner => &zayne::DIVINER,
        SetCardId::Snowfall => &zayne::SNOWFALL,
        SetCardId::Forever => &zayne::FOREVER,
        SetCardId::Mistsea => &rafayel::MISTSEA,
        SetCardId::Temple => &rafayel::TEMPLE,
        SetCardId::DeepSea => &rafayel::DEEP_SEA,
        SetCardId::CrimsonRapture => &sylus::CRIMSON_RAPTURE,
        SetCardId::Abyssal => &sylus::ABYSSAL,
        SetCardId::Captivating => &sylus::CAPTIVATING,
        SetCardId::LoneRoad => &caleb::LONE_ROAD,
        SetCardId::Farspace => &caleb::FARSPACE,
        SetCardId::FourStar => &FOUR_STAR,
        SetCardId::NoSet => &NO_SET,
    }
}

/// Table actually applied to `companion` wearing `set_card`.
pub fn effective_table(set_card: SetCardId, companion: CompanionId) -> &'static SetCardTable {
    let table = table_for(set_card);
    if set_card == SetCardId::NoSet || table.applies_to(companion) {
        table
    } else {
        &DEFAULT
    }
}

/// Buff the panel's set card and stage grant its companion.
pub fn stage_buff_for(stats: &Stats) -> StageBuff {
    effective_table(stats.set_card, stats.companion).stage_buff(stats.stage)
}

/// Every table, in catalogue order.
pub fn all_tables() -> impl Iterator<Item = &'static SetCardTable> {
    SetCardId::ALL.into_iter().map(table_for)
}
