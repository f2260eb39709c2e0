//! Plausibility checks for submitted battle records.
//!
//! Bounds come from the best gear the game currently allows, so a record
//! that fails here was mistyped or tampered with. Validation is advisory:
//! the estimator scores every record regardless.

use std::fmt;

use serde::Serialize;

use crate::data::catalog::{CompanionId, Partner, SetCardId};
use crate::data::record::BattleRecord;
use crate::data::stats::{Matching, Stage, Weapon};

pub const MAX_ATTACK: f64 = 1229.0 * 1.9 * 6.0;
pub const MAX_DEFENSE: f64 = 614.0 * 1.9 * 6.0;
pub const MAX_HP: f64 = 24594.0 * 1.9 * 6.0;
/// Base 150, 20 per sun card, 22.4 per moon core, 14.4 per core attribute.
pub const MAX_CRIT_DMG: f64 = 150.0 + 20.0 * 2.0 + 22.4 * 4.0 + 14.4 * 2.0 * 6.0;
pub const MAX_WEAKEN_BOOST: f64 = 18.2 * 4.0 + 11.0 * 2.0 * 6.0;
pub const MAX_OATH_BOOST: f64 = 14.0 * 2.0 + 5.6 * 2.0 * 6.0;
pub const MAX_ENERGY_REGEN: f64 = 48.0;
pub const MAX_OATH_REGEN: f64 = 40.0;
/// Energy and oath regen share one panel cap.
pub const MAX_TOTAL_REGEN: f64 = 48.0;
pub const MAX_TOTAL_LEVEL: i64 = 480;

const MATCHING_BUFFS: [&str; 8] = ["0", "5", "10", "15", "20", "25", "30", "不确定"];
const CHAMPIONSHIPS_BUFFS: [&str; 5] = ["0", "10", "20", "30", "40"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    /// Record field the diagnostic is about.
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
            .count()
    }

    fn error(&mut self, context: &str, message: impl Into<String>) {
        self.push(ValidationSeverity::Error, context, message);
    }
}

pub fn validate_record(record: &BattleRecord) -> ValidationReport {
    let mut report = ValidationReport::default();
    let companion = CompanionId::resolve(&record.companion);

    check_range(&mut report, "attack", &record.attack, Bound::Exclusive(0.0), MAX_ATTACK, false);
    check_range(&mut report, "defense", &record.defense, Bound::Inclusive(0.0), MAX_DEFENSE, true);
    check_range(&mut report, "hp", &record.hp, Bound::Inclusive(0.0), MAX_HP, true);
    if let Some(companion) = companion {
        if companion.scales_with_defense() && is_zero_or_blank(&record.defense) {
            report.error("defense", format!("{companion} scales with defense, which cannot be 0"));
        }
        if companion.scales_with_hp() && is_zero_or_blank(&record.hp) {
            report.error("hp", format!("{companion} scales with hp, which cannot be 0"));
        }
    }

    let matching = record.matching.trim();
    if Matching::parse(matching) == Matching::Unknown && !matches!(matching, "不确定" | "unknown") {
        report.error("matching", format!("unknown matching '{matching}'"));
    }
    let matching_buff = record.matching_buff.trim();
    if !MATCHING_BUFFS.contains(&matching_buff) && matching_buff != "unknown" {
        report.error("matching_buff", format!("matching buff '{matching_buff}' is not a legal tier"));
    }
    let championships_buff = record.championships_buff.trim();
    if !championships_buff.is_empty() && !CHAMPIONSHIPS_BUFFS.contains(&championships_buff) {
        report.error(
            "championships_buff",
            format!("championships buff '{championships_buff}' is not a legal tier"),
        );
    }

    check_range(&mut report, "crit_rate", &record.crit_rate, Bound::Inclusive(0.0), 100.0, false);
    check_range(&mut report, "crit_dmg", &record.crit_dmg, Bound::Inclusive(0.0), MAX_CRIT_DMG, false);
    check_range(
        &mut report,
        "weaken_boost",
        &record.weaken_boost,
        Bound::Inclusive(0.0),
        MAX_WEAKEN_BOOST,
        false,
    );
    check_range(&mut report, "oath_boost", &record.oath_boost, Bound::Inclusive(0.0), MAX_OATH_BOOST, true);
    check_range(
        &mut report,
        "energy_regen",
        &record.energy_regen,
        Bound::Inclusive(0.0),
        MAX_ENERGY_REGEN,
        true,
    );
    check_range(&mut report, "oath_regen", &record.oath_regen, Bound::Inclusive(0.0), MAX_OATH_REGEN, true);
    let total_regen = lenient(&record.energy_regen) + lenient(&record.oath_regen);
    if total_regen > MAX_TOTAL_REGEN {
        report.error(
            "energy_regen",
            format!("energy regen plus oath regen is {total_regen}, above {MAX_TOTAL_REGEN}"),
        );
    }

    let total_level = record.total_level.trim();
    if !total_level.is_empty() {
        match total_level.parse::<i64>() {
            Ok(level) if (1..=MAX_TOTAL_LEVEL).contains(&level) => {}
            _ => report.error(
                "total_level",
                format!("total level '{total_level}' must be 1..={MAX_TOTAL_LEVEL} or left blank"),
            ),
        }
    }

    let stage = Stage::parse(&record.stage);
    if stage.is_none() {
        report.error("stage", format!("unknown stage '{}'", record.stage.trim()));
    }
    if Weapon::parse(&record.weapon).is_none() {
        report.error("weapon", format!("unknown weapon '{}'", record.weapon.trim()));
    }

    validate_loadout(&mut report, record, companion, stage);
    report
}

/// Companion, set card and stage must describe one legal loadout.
fn validate_loadout(
    report: &mut ValidationReport,
    record: &BattleRecord,
    companion: Option<CompanionId>,
    stage: Option<Stage>,
) {
    let raw_set_card = record.set_card.trim();
    let set_card = SetCardId::resolve(raw_set_card);
    let companion_partner = companion.and_then(CompanionId::partner);

    if companion_partner.is_none() {
        report.error("companion", format!("unknown companion '{}'", record.companion.trim()));
    }

    match set_card {
        Some(SetCardId::NoSet) => {}
        Some(SetCardId::FourStar) => report.push(
            ValidationSeverity::Info,
            "set_card",
            "Four Star applies to every companion",
        ),
        Some(card) => {
            if let (Some(partner), Some(card_partner)) = (companion_partner, card.partner()) {
                if partner != card_partner {
                    report.error(
                        "set_card",
                        format!("{card} belongs to {card_partner}, not {partner}"),
                    );
                }
            }
        }
        None => match untabled_owner(raw_set_card) {
            Some(owners) => {
                if let Some(partner) = companion_partner {
                    if !owners.contains(&partner) {
                        report.error(
                            "set_card",
                            format!("set card '{raw_set_card}' does not belong to {partner}"),
                        );
                    }
                }
                report.push(
                    ValidationSeverity::Warning,
                    "set_card",
                    format!("set card '{raw_set_card}' has no buff table and scores as No Set"),
                );
            }
            None => report.error("set_card", format!("unknown set card '{raw_set_card}'")),
        },
    }

    let no_set = set_card == Some(SetCardId::NoSet);
    match stage {
        Some(Stage::None) if !no_set => {
            report.error("stage", "a worn set card needs a stage")
        }
        Some(stage) if no_set && stage != Stage::None => {
            report.error("stage", format!("No Set cannot have stage {}", stage.as_str()))
        }
        _ => {}
    }
}

/// Partners that own a legal set card without a buff table.
fn untabled_owner(raw: &str) -> Option<Vec<Partner>> {
    let owners: Vec<Partner> = Partner::ALL
        .into_iter()
        .filter(|partner| partner.untabled_set_cards().contains(&raw))
        .collect();
    (!owners.is_empty()).then_some(owners)
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

fn check_range(
    report: &mut ValidationReport,
    field: &str,
    raw: &str,
    min: Bound,
    max: f64,
    blank_ok: bool,
) {
    let raw = raw.trim();
    if raw.is_empty() && blank_ok {
        return;
    }
    let Some(value) = raw.parse::<f64>().ok().filter(|value| value.is_finite()) else {
        report.error(field, format!("'{raw}' is not a number"));
        return;
    };
    let above_min = match min {
        Bound::Inclusive(min) => value >= min,
        Bound::Exclusive(min) => value > min,
    };
    if !above_min || value > max {
        report.error(field, format!("{value} is outside the legal range (max {max:.1})"));
    }
}

fn lenient(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn is_zero_or_blank(raw: &str) -> bool {
    lenient(raw) == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BattleRecord {
        BattleRecord {
            attack: "11200".into(),
            hp: "210000".into(),
            defense: "5045".into(),
            matching: "顺".into(),
            matching_buff: "20".into(),
            crit_rate: "65".into(),
            crit_dmg: "300".into(),
            weaken_boost: "90".into(),
            oath_boost: "40".into(),
            energy_regen: "10".into(),
            oath_regen: "12".into(),
            total_level: "300".into(),
            companion: "暗蚀国王".into(),
            set_card: "夜誓".into(),
            stage: "IV".into(),
            weapon: "专武".into(),
            championships_buff: "20".into(),
            ..BattleRecord::default()
        }
    }

    fn error_fields(report: &ValidationReport) -> Vec<&str> {
        report
            .diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
            .map(|diag| diag.context.as_str())
            .collect()
    }

    #[test]
    fn legal_record_passes() {
        let report = validate_record(&record());
        assert!(!report.has_errors(), "{:?}", report.diagnostics);
    }

    #[test]
    fn out_of_range_stats_are_errors() {
        let bad = BattleRecord {
            attack: "0".into(),
            crit_rate: "101".into(),
            crit_dmg: "453".into(),
            total_level: "481".into(),
            ..record()
        };
        let report = validate_record(&bad);
        assert_eq!(
            error_fields(&report),
            vec!["attack", "crit_rate", "crit_dmg", "total_level"]
        );
    }

    #[test]
    fn regen_shares_one_cap() {
        let bad = BattleRecord {
            energy_regen: "30".into(),
            oath_regen: "20".into(),
            ..record()
        };
        assert_eq!(error_fields(&validate_record(&bad)), vec!["energy_regen"]);
    }

    #[test]
    fn scaling_stat_cannot_be_zero() {
        let bad = BattleRecord {
            hp: "".into(),
            ..record()
        };
        assert_eq!(error_fields(&validate_record(&bad)), vec!["hp"]);

        let lumiere = BattleRecord {
            companion: "光猎".into(),
            set_card: "末夜".into(),
            defense: "0".into(),
            ..record()
        };
        assert_eq!(error_fields(&validate_record(&lumiere)), vec!["defense"]);
    }

    #[test]
    fn set_card_must_match_partner() {
        let bad = BattleRecord {
            set_card: "深海".into(),
            ..record()
        };
        assert_eq!(error_fields(&validate_record(&bad)), vec!["set_card"]);

        let untabled = BattleRecord {
            set_card: "鎏光".into(),
            ..record()
        };
        let report = validate_record(&untabled);
        assert!(!report.has_errors());
        assert_eq!(report.diagnostics[0].severity, ValidationSeverity::Warning);
    }

    #[test]
    fn no_set_and_stage_none_go_together() {
        let bad = BattleRecord {
            set_card: "无套装".into(),
            ..record()
        };
        assert_eq!(error_fields(&validate_record(&bad)), vec!["stage"]);

        let ok = BattleRecord {
            set_card: "无套装".into(),
            stage: "无套装".into(),
            ..record()
        };
        assert!(!validate_record(&ok).has_errors());
    }

    #[test]
    fn illegal_tiers_and_identifiers() {
        let bad = BattleRecord {
            matching: "maybe".into(),
            matching_buff: "12".into(),
            championships_buff: "15".into(),
            weapon: "bow".into(),
            stage: "V".into(),
            ..record()
        };
        let report = validate_record(&bad);
        assert_eq!(
            error_fields(&report),
            vec!["matching", "matching_buff", "championships_buff", "stage", "weapon"]
        );
        assert_eq!(report.error_count(), 5);
    }
}
