//! Submitted battle records and the stat normalizer.
//!
//! A [BattleRecord] mirrors the community sheet: every field is text, keyed
//! either by snake_case English names or by the sheet's Chinese headers.
//! [BattleRecord::to_stats] turns it into a numeric [Stats] panel and never
//! fails: unparseable numbers become zero and unknown identifiers route to
//! the default companion or to "No Set".

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::data::catalog::{CompanionId, SetCardId};
use crate::data::stats::{Matching, Stage, Stats, Weapon, DEFAULT_TOTAL_LEVEL};

const UNKNOWN_MATCHING_BUFF: [&str; 2] = ["不确定", "unknown"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleRecord {
    #[serde(alias = "攻击", deserialize_with = "text")]
    pub attack: String,
    #[serde(alias = "生命", deserialize_with = "text")]
    pub hp: String,
    #[serde(alias = "防御", deserialize_with = "text")]
    pub defense: String,
    #[serde(alias = "对谱", deserialize_with = "text")]
    pub matching: String,
    #[serde(alias = "对谱加成", deserialize_with = "text")]
    pub matching_buff: String,
    #[serde(alias = "暴击", deserialize_with = "text")]
    pub crit_rate: String,
    #[serde(alias = "暴伤", deserialize_with = "text")]
    pub crit_dmg: String,
    #[serde(alias = "加速回能", deserialize_with = "text")]
    pub energy_regen: String,
    #[serde(alias = "虚弱增伤", deserialize_with = "text")]
    pub weaken_boost: String,
    #[serde(alias = "誓约增伤", deserialize_with = "text")]
    pub oath_boost: String,
    #[serde(alias = "誓约回能", deserialize_with = "text")]
    pub oath_regen: String,
    #[serde(alias = "卡总等级", deserialize_with = "text")]
    pub total_level: String,
    #[serde(alias = "搭档身份", deserialize_with = "text")]
    pub companion: String,
    #[serde(alias = "日卡", deserialize_with = "text")]
    pub set_card: String,
    #[serde(alias = "阶数", deserialize_with = "text")]
    pub stage: String,
    #[serde(alias = "武器", deserialize_with = "text")]
    pub weapon: String,
    #[serde(alias = "加成", alias = "buff", deserialize_with = "text")]
    pub championships_buff: String,
    #[serde(alias = "关卡", deserialize_with = "text")]
    pub level_type: String,
    #[serde(alias = "关数", deserialize_with = "text")]
    pub level_number: String,
    #[serde(alias = "模式", deserialize_with = "text")]
    pub level_mode: String,
}

impl BattleRecord {
    pub fn to_stats(&self) -> Stats {
        let companion = CompanionId::resolve(&self.companion).unwrap_or_else(|| {
            if !self.companion.trim().is_empty() {
                tracing::warn!(companion = %self.companion, "unknown companion, using default kit");
            }
            CompanionId::Default
        });
        let set_card = SetCardId::resolve(&self.set_card).unwrap_or_else(|| {
            if !self.set_card.trim().is_empty() {
                tracing::warn!(set_card = %self.set_card, "set card has no buff table, scoring as no set");
            }
            SetCardId::NoSet
        });
        let stage = Stage::parse(&self.stage).unwrap_or_else(|| {
            tracing::warn!(stage = %self.stage, "unknown stage, treating as none");
            Stage::None
        });

        let total_level = match parse_int(&self.total_level) {
            level if level <= 0 => DEFAULT_TOTAL_LEVEL,
            level => u32::try_from(level).unwrap_or(DEFAULT_TOTAL_LEVEL),
        };
        let matching_buff = if UNKNOWN_MATCHING_BUFF.contains(&self.matching_buff.trim()) {
            0.0
        } else {
            parse_float(&self.matching_buff)
        };

        Stats {
            attack: parse_int(&self.attack),
            hp: parse_int(&self.hp),
            defense: parse_int(&self.defense),
            matching: Matching::parse(&self.matching),
            matching_buff,
            crit_rate: parse_float(&self.crit_rate),
            crit_dmg: parse_float(&self.crit_dmg),
            energy_regen: parse_float(&self.energy_regen),
            weaken_boost: parse_float(&self.weaken_boost),
            oath_boost: parse_float(&self.oath_boost),
            oath_regen: parse_float(&self.oath_regen),
            total_level,
            companion,
            set_card,
            stage,
            weapon: Weapon::parse(&self.weapon).unwrap_or(Weapon::Unspecified),
            championships_buff: parse_float(&self.championships_buff),
        }
    }

    /// Grouping key for ranking records that fought the same level.
    pub fn level_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.level_type.trim(),
            self.level_number.trim(),
            self.level_mode.trim()
        )
    }
}

pub fn parse_float(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Integer stat: fractional input is truncated, garbage is zero.
///
/// Lenient: "123.7" reads as 123 where a strict integer parse would give 0.
pub fn parse_int(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .unwrap_or_else(|_| parse_float(raw).trunc() as i64)
}

/// Accepts text, numbers, or null for a text column.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_some<D2: Deserializer<'de>>(self, inner: D2) -> Result<String, D2::Error> {
            inner.deserialize_any(TextVisitor)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}
