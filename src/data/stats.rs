//! Numeric stat panel consumed by the companion strategies and the scorer.

use serde::Serialize;

use crate::data::catalog::{CompanionId, SetCardId};

/// Default equipment level sum when a record leaves it blank.
pub const DEFAULT_TOTAL_LEVEL: u32 = 480;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Matching {
    Favorable,
    Unfavorable,
    #[default]
    Unknown,
}

impl Matching {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "顺" | "favorable" | "Favorable" => Self::Favorable,
            "逆" | "unfavorable" | "Unfavorable" => Self::Unfavorable,
            _ => Self::Unknown,
        }
    }

    /// Share of a rotation landing on a weakened enemy.
    pub fn weaken_rate(self) -> f64 {
        match self {
            Self::Favorable => 0.50,
            Self::Unfavorable | Self::Unknown => 0.25,
        }
    }

    /// Flat weaken-phase damage bonus, in percent.
    pub fn weaken_bonus(self) -> f64 {
        match self {
            Self::Favorable => 250.0,
            Self::Unfavorable | Self::Unknown => 150.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum Stage {
    #[default]
    #[serde(rename = "none")]
    None,
    I,
    II,
    III,
    IV,
}

impl Stage {
    pub const CONCRETE: [Stage; 4] = [Stage::I, Stage::II, Stage::III, Stage::IV];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "I" => Some(Self::I),
            "II" => Some(Self::II),
            "III" => Some(Self::III),
            "IV" => Some(Self::IV),
            "无套装" | "none" | "None" | "" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        }
    }

    /// Zero-based table index for concrete stages.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::I => Some(0),
            Self::II => Some(1),
            Self::III => Some(2),
            Self::IV => Some(3),
        }
    }

    /// Stage III or IV.
    pub fn is_awakened(self) -> bool {
        matches!(self, Self::III | Self::IV)
    }

    /// A concrete stage above I.
    pub fn unlocks_oath(self) -> bool {
        matches!(self, Self::II | Self::III | Self::IV)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    Signature,
    Greatsword,
    Sword,
    Staff,
    Pistol,
    /// Unrecognised weapon text; scores with zero-coefficient generic skills.
    #[default]
    Unspecified,
}

impl Weapon {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "专武" | "signature" | "Signature" => Some(Self::Signature),
            "重剑" | "greatsword" | "Greatsword" => Some(Self::Greatsword),
            "单手剑" | "sword" | "Sword" => Some(Self::Sword),
            "法杖" | "staff" | "Staff" => Some(Self::Staff),
            "手枪" | "pistol" | "Pistol" => Some(Self::Pistol),
            _ => None,
        }
    }

    pub fn is_signature(self) -> bool {
        self == Self::Signature
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub attack: i64,
    pub hp: i64,
    pub defense: i64,
    pub matching: Matching,
    pub matching_buff: f64,
    pub crit_rate: f64,
    pub crit_dmg: f64,
    pub energy_regen: f64,
    pub weaken_boost: f64,
    pub oath_boost: f64,
    pub oath_regen: f64,
    pub total_level: u32,
    pub companion: CompanionId,
    pub set_card: SetCardId,
    pub stage: Stage,
    pub weapon: Weapon,
    pub championships_buff: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            attack: 0,
            hp: 0,
            defense: 0,
            matching: Matching::Unknown,
            matching_buff: 0.0,
            crit_rate: 0.0,
            crit_dmg: 0.0,
            energy_regen: 0.0,
            weaken_boost: 0.0,
            oath_boost: 0.0,
            oath_regen: 0.0,
            total_level: DEFAULT_TOTAL_LEVEL,
            companion: CompanionId::Default,
            set_card: SetCardId::NoSet,
            stage: Stage::None,
            weapon: Weapon::Unspecified,
            championships_buff: 0.0,
        }
    }
}

impl Stats {
    /// Energy tier of the panel. Generic active casts are `energy - 8`.
    pub fn energy(&self) -> u32 {
        let base = match self.energy_regen {
            r if r >= 39.6 => 12,
            r if r >= 30.0 => 11,
            r if r >= 10.8 => 10,
            r if r >= 6.0 => 9,
            _ => 8,
        };
        if self.stage.is_awakened() {
            base + 1
        } else {
            base
        }
    }

    /// Number of oath casts the rotation fits.
    pub fn oath_count(&self) -> u32 {
        if self.stage.unlocks_oath() || self.oath_regen >= 17.0 {
            1
        } else {
            0
        }
    }

    pub fn weaken_rate(&self) -> f64 {
        self.matching.weaken_rate()
    }

    pub fn has_signature_weapon(&self) -> bool {
        self.weapon.is_signature()
    }

    /// True when `set_card` is equipped at one of `stages`.
    pub fn set_at(&self, set_card: SetCardId, stages: &[Stage]) -> bool {
        self.set_card == set_card && stages.contains(&self.stage)
    }

    /// Copy with extra energy regen, for kits that refund energy.
    pub fn with_extra_energy_regen(&self, extra: f64) -> Self {
        Self {
            energy_regen: self.energy_regen + extra,
            ..*self
        }
    }
}
