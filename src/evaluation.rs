//! Quartile labels against records that fought the same level.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::combat::engine::CombatPower;

/// Fewer peers than this always rate [Evaluation::Standard].
pub const MIN_PEERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// Top quartile: the build had power to spare.
    Surplus,
    Standard,
    /// Bottom quartile: cleared at the limit of the build.
    Limit,
}

impl Evaluation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Surplus => "溢出",
            Self::Standard => "标准",
            Self::Limit => "极限",
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rates `score` against `peers` (which may include `score` itself).
pub fn evaluate(score: i64, peers: &[i64]) -> Evaluation {
    if peers.len() < MIN_PEERS {
        return Evaluation::Standard;
    }
    let mut sorted = peers.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let q1 = sorted[n / 4];
    let q3 = sorted[3 * n / 4];

    if score >= q3 {
        Evaluation::Surplus
    } else if score <= q1 {
        Evaluation::Limit
    } else {
        Evaluation::Standard
    }
}

/// Fills `evaluation` on every power with a positive buffed score, ranking
/// it against the others sharing its level key.
pub fn assign_evaluations<K>(powers: &mut [(K, CombatPower)])
where
    K: AsRef<str>,
{
    let mut groups: HashMap<&str, Vec<i64>> = HashMap::new();
    for (key, power) in powers.iter() {
        if let Some(score) = power.buffed_value() {
            groups.entry(key.as_ref()).or_default().push(score);
        }
    }
    let labels: Vec<Option<Evaluation>> = powers
        .iter()
        .map(|(key, power)| {
            let score = power.buffed_value()?;
            let peers = groups.get(key.as_ref())?;
            Some(evaluate(score, peers))
        })
        .collect();

    for ((_, power), label) in powers.iter_mut().zip(labels) {
        power.evaluation = label.map(|label| label.label().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(buffed: &str) -> CombatPower {
        CombatPower {
            buffed_score: buffed.to_string(),
            ..CombatPower::default()
        }
    }

    #[test]
    fn small_groups_are_standard() {
        assert_eq!(evaluate(1, &[1, 2, 3, 4]), Evaluation::Standard);
        assert_eq!(evaluate(100, &[]), Evaluation::Standard);
    }

    #[test]
    fn quartiles_split_at_sorted_indices() {
        let peers = [80, 10, 50, 30, 70, 20, 60, 40];
        // q1 = 30, q3 = 70
        assert_eq!(evaluate(70, &peers), Evaluation::Surplus);
        assert_eq!(evaluate(80, &peers), Evaluation::Surplus);
        assert_eq!(evaluate(30, &peers), Evaluation::Limit);
        assert_eq!(evaluate(10, &peers), Evaluation::Limit);
        assert_eq!(evaluate(50, &peers), Evaluation::Standard);
    }

    #[test]
    fn assignment_groups_by_level_and_skips_unscored() {
        let mut powers = vec![
            ("光-100-稳定", power("100")),
            ("光-100-稳定", power("200")),
            ("光-100-稳定", power("300")),
            ("光-100-稳定", power("400")),
            ("光-100-稳定", power("500")),
            ("光-100-稳定", power("0")),
            ("火-100-稳定", power("900")),
        ];
        assign_evaluations(&mut powers);

        let labels: Vec<Option<&str>> = powers
            .iter()
            .map(|(_, power)| power.evaluation.as_deref())
            .collect();
        assert_eq!(
            labels,
            vec![
                Some("极限"),
                Some("极限"),
                Some("标准"),
                Some("溢出"),
                Some("溢出"),
                None,
                Some("标准"),
            ]
        );
    }
}
