//! Estimator facade: record → stats → rotation → buffs → combat power.

use tracing::debug;

use crate::combat::buffs::apply_stage_buff;
use crate::combat::engine::{score_flow, CombatPower};
use crate::combat::skill::CompanionFlow;
use crate::companions::companion_for;
use crate::data::record::BattleRecord;
use crate::data::stats::Stats;
use crate::set_cards;

/// Stateless scoring pipeline. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator;

impl Estimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, record: &BattleRecord) -> CombatPower {
        self.estimate_stats(&record.to_stats())
    }

    pub fn estimate_stats(&self, stats: &Stats) -> CombatPower {
        let flow = self.flow_for(stats);
        trace_flow(&flow);
        let power = score_flow(&flow, stats);
        debug!(
            companion = %stats.companion,
            set_card = %stats.set_card,
            stage = stats.stage.as_str(),
            score = %power.score,
            buffed_score = %power.buffed_score,
            "estimated combat power"
        );
        power
    }

    /// Rotation of `stats` with its set-card buffs already applied.
    pub fn flow_for(&self, stats: &Stats) -> CompanionFlow {
        let mut flow = companion_for(stats.companion).build_flow(stats);
        apply_stage_buff(&mut flow, &set_cards::stage_buff_for(stats));
        flow
    }
}

/// Convenience wrapper around [Estimator::estimate].
pub fn estimate(record: &BattleRecord) -> CombatPower {
    Estimator.estimate(record)
}

fn trace_flow(flow: &CompanionFlow) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for (index, period) in flow.periods().iter().enumerate() {
        debug!(
            period = index,
            weaken_rate = period.weaken_rate,
            boost = period.boost,
            skills = period.skills.len(),
            "rotation period"
        );
        for skill in period.skills.iter() {
            debug!(
                period = index,
                skill = skill.name,
                base = skill.base,
                hp_rate = skill.hp_rate,
                attack_rate = skill.attack_rate,
                defense_rate = skill.defense_rate,
                count = skill.count,
                damage_boost = skill.damage_boost,
                "rotation skill"
            );
        }
    }
}
