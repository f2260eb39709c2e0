//! Combat-power scorer.
//!
//! Reduces a buffed [CompanionFlow] and the stat panel to four totals. Each
//! skill's raw hit is scaled by its damage and period boosts, the oath boost
//! for oath-type skills, and the level-versus-defense curve, then split
//! between the normal window (crit-blended) and the weaken window (flat
//! weaken bonus).

use serde::{Deserialize, Serialize};

use crate::combat::skill::{CompanionFlow, Period, Skill};
use crate::data::stats::Stats;

/// Enemy defense weight in the level curve: 80 * 3 + 100.
pub const ENEMY_DEFENSE_WEIGHT: f64 = 340.0;
/// Fixed floor of the level curve denominator.
pub const LEVEL_CURVE_FLOOR: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombatPower {
    pub score: String,
    pub buffed_score: String,
    pub weaken_score: String,
    pub non_weaken_score: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
}

impl CombatPower {
    /// Buffed score as an integer, if the record carries a usable one.
    pub fn buffed_value(&self) -> Option<i64> {
        self.buffed_score.parse().ok().filter(|value| *value > 0)
    }
}

/// Unrounded running totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreTotals {
    pub total: f64,
    pub weaken: f64,
    pub non_weaken: f64,
}

impl ScoreTotals {
    fn add(&mut self, contribution: SkillContribution) {
        self.total += contribution.weaken + contribution.non_weaken;
        self.weaken += contribution.weaken;
        self.non_weaken += contribution.non_weaken;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkillContribution {
    pub weaken: f64,
    pub non_weaken: f64,
}

/// Damage of a single cast before the crit and weaken split.
pub fn raw_hit(skill: &Skill, period_boost: f64, stats: &Stats) -> f64 {
    let mut raw = skill.base
        + skill.hp_rate / 100.0 * stats.hp as f64
        + skill.attack_rate / 100.0 * stats.attack as f64
        + skill.defense_rate / 100.0 * stats.defense as f64;

    raw *= 1.0 + (skill.damage_boost + period_boost) / 100.0;
    if skill.is_oath() {
        raw *= 1.0 + skill.oath_boost / 100.0;
    }
    raw * level_defense_ratio(stats.total_level, skill.enemy_defence_reduction)
}

/// `1 + L / (L + 300 + 340 * (1 - reduction / 100))`.
pub fn level_defense_ratio(total_level: u32, enemy_defence_reduction: f64) -> f64 {
    let level = f64::from(total_level);
    1.0 + level
        / (level
            + LEVEL_CURVE_FLOOR
            + ENEMY_DEFENSE_WEIGHT * (1.0 - enemy_defence_reduction / 100.0))
}

/// Share of `skill`'s casts landing on a weakened enemy in `period`.
pub fn effective_weaken_rate(skill: &Skill, period: &Period) -> f64 {
    if skill.is_oath() {
        1.0
    } else if skill.exempt_from_weaken_split {
        0.0
    } else {
        period.weaken_rate
    }
}

pub fn score_skill(skill: &Skill, period: &Period, stats: &Stats) -> SkillContribution {
    let raw = raw_hit(skill, period.boost, stats);
    let weaken_rate = effective_weaken_rate(skill, period);
    let count = f64::from(skill.count);

    let crit_rate = if skill.can_crit {
        (stats.crit_rate + skill.crit_rate) / 100.0
    } else {
        0.0
    };
    let crit_dmg = (stats.crit_dmg + skill.crit_dmg) / 100.0;
    let normal = raw * (1.0 - weaken_rate) * count;
    let non_weaken = normal * (1.0 - crit_rate) + normal * crit_rate * crit_dmg;

    let weaken_bonus = stats.weaken_boost + skill.weaken_boost + stats.matching.weaken_bonus();
    let weaken = raw * weaken_rate * count * (1.0 + weaken_bonus / 100.0);

    SkillContribution { weaken, non_weaken }
}

pub fn score_totals(flow: &CompanionFlow, stats: &Stats) -> ScoreTotals {
    let mut totals = ScoreTotals::default();
    for period in flow.periods() {
        for skill in period.skills.iter() {
            totals.add(score_skill(skill, period, stats));
        }
    }
    totals
}

/// Scores `flow` and applies the matching and championship multipliers.
pub fn score_flow(flow: &CompanionFlow, stats: &Stats) -> CombatPower {
    let totals = score_totals(flow, stats);
    let buffed = totals.total
        * (1.0 + stats.matching_buff / 100.0)
        * (1.0 + stats.championships_buff / 100.0);

    CombatPower {
        score: render(totals.total),
        buffed_score: render(buffed),
        weaken_score: render(totals.weaken),
        non_weaken_score: render(totals.non_weaken),
        evaluation: None,
    }
}

fn render(total: f64) -> String {
    format!("{}", total.floor() as i64)
}
