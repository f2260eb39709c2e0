//! Skill, period and rotation model.
//!
//! A [CompanionFlow] is one or two [Period]s of skills. Skill names double as
//! buff-table keys, so producers and set-card tables share the constants in
//! [names].

use serde::Serialize;

/// Skill names shared by companion kits and set-card buff tables.
pub mod names {
    pub const ACTIVE: &str = "active";
    pub const BASIC_ATTACK: &str = "basic attack";
    pub const HEAVY_ATTACK: &str = "heavy attack";
    pub const RESONANCE: &str = "resonance";
    pub const OATH: &str = "oath";
    pub const SUPPORT: &str = "support";
    pub const PASSIVE: &str = "passive";

    pub const GREATSWORD_ACTIVE: &str = "greatsword active";
    pub const SWORD_ACTIVE: &str = "sword active";
    pub const STAFF_ACTIVE: &str = "staff active";
    pub const PISTOL_ACTIVE: &str = "pistol active";
    /// Every generic-weapon active, for tables that buff "the active" of any weapon.
    pub const WEAPON_ACTIVES: [&str; 4] =
        [GREATSWORD_ACTIVE, SWORD_ACTIVE, STAFF_ACTIVE, PISTOL_ACTIVE];

    pub const OATH_AWAKENING: &str = "oath (resonant awakening)";
    pub const OATH_STRIKE: &str = "oath (resonant strike)";
    pub const OATH_NO_WEAKEN: &str = "oath (no weaken window)";

    pub const CROWNED_ACTIVE: &str = "active (crowned)";
    pub const CROWNED_BASIC_ATTACK: &str = "basic attack (crowned)";
    pub const CROWNED_SUPPORT: &str = "support (crowned)";

    pub const ASCENDED_HEAVY_ATTACK: &str = "heavy attack (ascended)";
    pub const ASCENDED_SUPPORT: &str = "support (ascended)";
    pub const GOLDEN_FEATHER: &str = "golden feather";
    pub const SOUL_RIFT_BREAK: &str = "soul rift break";

    pub const BLESSED_ACTIVE: &str = "active (blessed)";
    pub const BLESSED_BASIC_ATTACK: &str = "basic attack (blessed)";
    pub const WEAPON_PASSIVE_HEAVY: &str = "weapon passive heavy attack";
    pub const BLESSED_WEAPON_PASSIVE_HEAVY: &str = "weapon passive heavy attack (blessed)";
    pub const THUNDER_CRYSTAL: &str = "thunder crystal";
    pub const THUNDER_TIDE: &str = "thunder tide";
    pub const FALLING_THUNDER: &str = "falling thunder";

    pub const ROSE_THORNS: &str = "rose thorns";
    pub const BLOOD_OATH_ROSE_THORNS: &str = "rose thorns (blood oath)";
    pub const ROSE_RAIN: &str = "rose rain";
    pub const BLOOD_OATH_HEAVY_ATTACK: &str = "heavy attack (blood oath)";
    pub const VEIL_LATTICE: &str = "veil lattice";
    pub const BLOOD_BREAK: &str = "blood break";
    pub const BLOOD_ROSE_BULLET: &str = "blood rose bullet";

    pub const MOONLIGHT: &str = "moonlight";
    pub const SEA_SPIRIT: &str = "sea spirit";
    pub const BURN: &str = "burn";
    pub const POWER_SLASH: &str = "power slash";
    pub const SIN_OF_ETERNITY: &str = "sin of eternity";
    pub const RESONANCE_SECOND_HALF: &str = "resonance (second half)";
    pub const NIGHTMARE_CLAW_SWEEP: &str = "nightmare claw sweep";
    pub const JADE_BREAKER: &str = "jade breaker";
    pub const PIERCING_RAIN: &str = "piercing rain";
    pub const PLUNDER_MARK: &str = "plunder mark";
    pub const DEEP_STRIKE: &str = "deep strike";
    pub const FOCUSED_GRAVITY_WAVE: &str = "focused gravity wave";
    pub const LIGHTCHASE_RESONANCE: &str = "lightchase resonance";
    pub const FIRE_TRAP: &str = "fire trap";
    pub const TARGET_MARK: &str = "target mark";
    pub const SWORD_INTENT: &str = "sword intent";
    pub const ROSY_HUE: &str = "rosy hue";
    pub const ECHO: &str = "echo";

    /// Skills that always land in the weaken window and take oath boost.
    pub const OATH_TYPES: [&str; 3] = [OATH, OATH_AWAKENING, OATH_STRIKE];
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub base: f64,
    pub hp_rate: f64,
    pub attack_rate: f64,
    pub defense_rate: f64,
    pub count: u32,
    pub crit_rate: f64,
    pub crit_dmg: f64,
    pub weaken_boost: f64,
    pub damage_boost: f64,
    pub oath_boost: f64,
    pub enemy_defence_reduction: f64,
    pub can_crit: bool,
    pub exempt_from_weaken_split: bool,
}

impl Skill {
    /// A skill with only a name. Placeholder slots score zero.
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn active() -> Self {
        Self {
            name: names::ACTIVE,
            can_crit: true,
            ..Self::default()
        }
    }

    pub fn basic_attack() -> Self {
        Self {
            name: names::BASIC_ATTACK,
            can_crit: true,
            ..Self::default()
        }
    }

    /// Four casts, can crit, never lands in the weaken window.
    pub fn resonance() -> Self {
        Self {
            name: names::RESONANCE,
            count: 4,
            can_crit: true,
            exempt_from_weaken_split: true,
            ..Self::default()
        }
    }

    pub fn oath() -> Self {
        Self::named(names::OATH)
    }

    pub fn support() -> Self {
        Self {
            name: names::SUPPORT,
            can_crit: true,
            ..Self::default()
        }
    }

    pub fn passive() -> Self {
        Self::named(names::PASSIVE)
    }

    pub fn renamed(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    pub fn with_count(self, count: u32) -> Self {
        Self { count, ..self }
    }

    pub fn is_oath(&self) -> bool {
        names::OATH_TYPES.contains(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SkillSet(pub Vec<Skill>);

impl SkillSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Skill> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Skill> {
        self.0.iter_mut()
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.0.iter().find(|skill| skill.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Skill>> for SkillSet {
    fn from(skills: Vec<Skill>) -> Self {
        Self(skills)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    pub skills: SkillSet,
    pub weaken_rate: f64,
    pub boost: f64,
}

impl Period {
    /// Weaken rate is clamped into `[0, 1]`.
    pub fn new(skills: Vec<Skill>, weaken_rate: f64) -> Self {
        Self {
            skills: skills.into(),
            weaken_rate: weaken_rate.clamp(0.0, 1.0),
            boost: 0.0,
        }
    }

    pub fn with_boost(self, boost: f64) -> Self {
        Self { boost, ..self }
    }
}

/// Full rotation model for one companion and stat panel. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanionFlow {
    periods: Vec<Period>,
}

impl CompanionFlow {
    pub fn single(period: Period) -> Self {
        Self {
            periods: vec![period],
        }
    }

    /// Opening period followed by a transformed phase.
    pub fn phased(opening: Period, transformed: Period) -> Self {
        Self {
            periods: vec![opening, transformed],
        }
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn periods_mut(&mut self) -> &mut [Period] {
        &mut self.periods
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.periods.iter().flat_map(|period| period.skills.iter())
    }

    pub fn find(&self, name: &str) -> Option<&Skill> {
        self.skills().find(|skill| skill.name == name)
    }
}
