//! Set-card buff deltas and the buff applicator.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::combat::skill::{CompanionFlow, Skill};

/// What a buff entry targets: every skill, or one skill by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuffTarget {
    All,
    Skill(&'static str),
}

impl BuffTarget {
    pub fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Skill(name) => name,
        }
    }
}

impl Serialize for BuffTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Sparse per-skill delta. Absent fields are zero; `count_bonus` only
/// rescales when above 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SkillBuff {
    #[serde(skip_serializing_if = "is_zero")]
    pub crit_rate: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub crit_dmg: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub weaken_boost: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub damage_boost: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub oath_boost: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub count_bonus: f64,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

impl SkillBuff {
    pub const NONE: SkillBuff = SkillBuff {
        crit_rate: 0.0,
        crit_dmg: 0.0,
        weaken_boost: 0.0,
        damage_boost: 0.0,
        oath_boost: 0.0,
        count_bonus: 0.0,
    };

    pub const fn damage(damage_boost: f64) -> Self {
        Self {
            damage_boost,
            ..Self::NONE
        }
    }

    pub const fn count(count_bonus: f64) -> Self {
        Self {
            count_bonus,
            ..Self::NONE
        }
    }

    pub const fn weaken(weaken_boost: f64) -> Self {
        Self {
            weaken_boost,
            ..Self::NONE
        }
    }

    pub const fn crit_dmg(crit_dmg: f64) -> Self {
        Self {
            crit_dmg,
            ..Self::NONE
        }
    }

    pub const fn oath(oath_boost: f64) -> Self {
        Self {
            oath_boost,
            ..Self::NONE
        }
    }

    pub const fn and_damage(self, damage_boost: f64) -> Self {
        Self {
            damage_boost,
            ..self
        }
    }

    pub const fn and_count(self, count_bonus: f64) -> Self {
        Self {
            count_bonus,
            ..self
        }
    }

    pub const fn and_weaken(self, weaken_boost: f64) -> Self {
        Self {
            weaken_boost,
            ..self
        }
    }

    pub const fn and_crit_dmg(self, crit_dmg: f64) -> Self {
        Self { crit_dmg, ..self }
    }

    /// Adds this delta onto `skill`.
    pub fn apply_to(&self, skill: &mut Skill) {
        skill.crit_rate += self.crit_rate;
        skill.crit_dmg += self.crit_dmg;
        skill.weaken_boost += self.weaken_boost;
        skill.damage_boost += self.damage_boost;
        skill.oath_boost += self.oath_boost;
        if self.count_bonus > 1.0 {
            skill.count = (f64::from(skill.count) * self.count_bonus) as u32;
        }
    }
}

/// Buff entries unlocked by one set-card stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StageBuff {
    entries: BTreeMap<BuffTarget, SkillBuff>,
}

impl StageBuff {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[(BuffTarget, SkillBuff)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn get(&self, target: BuffTarget) -> Option<&SkillBuff> {
        self.entries.get(&target)
    }

    pub fn wildcard(&self) -> Option<&SkillBuff> {
        self.get(BuffTarget::All)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Folds `buff` into every skill of `flow`: the wildcard entry first, then
/// the entry keyed by the skill's own name.
pub fn apply_stage_buff(flow: &mut CompanionFlow, buff: &StageBuff) {
    if buff.is_empty() {
        return;
    }
    let wildcard = buff.wildcard();
    for period in flow.periods_mut() {
        for skill in period.skills.iter_mut() {
            if let Some(all) = wildcard {
                all.apply_to(skill);
            }
            if let Some(own) = buff.get(BuffTarget::Skill(skill.name)) {
                own.apply_to(skill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::skill::{names, Period};

    fn flow() -> CompanionFlow {
        CompanionFlow::single(Period::new(
            vec![
                Skill::active().with_count(5),
                Skill::support().with_count(6),
            ],
            0.5,
        ))
    }

    #[test]
    fn wildcard_and_named_entries_stack() {
        let buff = StageBuff::from_entries(&[
            (BuffTarget::All, SkillBuff::damage(16.0)),
            (BuffTarget::Skill(names::ACTIVE), SkillBuff::damage(40.0)),
        ]);
        let mut flow = flow();
        apply_stage_buff(&mut flow, &buff);

        assert_eq!(flow.find(names::ACTIVE).map(|s| s.damage_boost), Some(56.0));
        assert_eq!(flow.find(names::SUPPORT).map(|s| s.damage_boost), Some(16.0));
    }

    #[test]
    fn count_bonus_only_scales_above_one() {
        let buff = StageBuff::from_entries(&[
            (BuffTarget::Skill(names::ACTIVE), SkillBuff::count(1.34)),
            (BuffTarget::Skill(names::SUPPORT), SkillBuff::count(0.88)),
        ]);
        let mut flow = flow();
        apply_stage_buff(&mut flow, &buff);

        assert_eq!(flow.find(names::ACTIVE).map(|s| s.count), Some(6));
        assert_eq!(flow.find(names::SUPPORT).map(|s| s.count), Some(6));
    }

    #[test]
    fn empty_buff_leaves_flow_untouched() {
        let mut buffed = flow();
        apply_stage_buff(&mut buffed, &StageBuff::empty());
        assert_eq!(buffed, flow());
    }

    #[test]
    fn builder_helpers_keep_earlier_fields() {
        let buff = SkillBuff::weaken(8.0).and_damage(20.0).and_count(1.6);
        assert_eq!(buff.weaken_boost, 8.0);
        assert_eq!(buff.damage_boost, 20.0);
        assert_eq!(buff.count_bonus, 1.6);
        assert_eq!(buff.crit_rate, 0.0);
    }
}
