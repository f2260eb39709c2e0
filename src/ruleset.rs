//! Serializable view of the compiled-in balance data.

use serde::Serialize;

use crate::companions::companion_for;
use crate::data::catalog::CompanionId;
use crate::set_cards::{self, SetCardTable, RULESET_VERSION};

#[derive(Debug, Clone, Serialize)]
pub struct CompanionEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub partner: Option<&'static str>,
    /// Set card whose specialised entries this companion receives.
    pub home_set_card: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Ruleset {
    pub version: &'static str,
    pub companions: Vec<CompanionEntry>,
    pub set_cards: Vec<&'static SetCardTable>,
}

impl Ruleset {
    pub fn current() -> Self {
        Self {
            version: RULESET_VERSION,
            companions: companion_catalogue(),
            set_cards: set_cards::all_tables().collect(),
        }
    }
}

pub fn companion_catalogue() -> Vec<CompanionEntry> {
    CompanionId::ALL
        .into_iter()
        .chain([CompanionId::Default])
        .map(|id| CompanionEntry {
            name: companion_for(id).name(),
            aliases: id.aliases(),
            partner: id.partner().map(|partner| partner.name()),
            home_set_card: set_cards::all_tables()
                .find(|table| table.home == Some(id))
                .map(|table| table.id.name()),
        })
        .collect()
}
