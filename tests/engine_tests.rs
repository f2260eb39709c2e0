use lysk_cp::combat::buffs::{apply_stage_buff, BuffTarget, SkillBuff, StageBuff};
use lysk_cp::combat::engine::{level_defense_ratio, score_skill};
use lysk_cp::combat::skill::{names, CompanionFlow, Period, Skill};
use lysk_cp::companions::companion_for;
use lysk_cp::data::catalog::{CompanionId, SetCardId};
use lysk_cp::data::stats::{Matching, Stage, DEFAULT_TOTAL_LEVEL};
use lysk_cp::{estimate, set_cards, BattleRecord, CombatPower, Estimator, Stats};

fn scenario_a() -> BattleRecord {
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
        total_level: "300".into(),
        companion: "King of Darknight".into(),
        set_card: "Night Vow".into(),
        stage: "IV".into(),
        weapon: "signature".into(),
        ..BattleRecord::default()
    }
}

fn power(score: &str, buffed: &str, weaken: &str, non_weaken: &str) -> CombatPower {
    CombatPower {
        score: score.into(),
        buffed_score: buffed.into(),
        weaken_score: weaken.into(),
        non_weaken_score: non_weaken.into(),
        evaluation: None,
    }
}

#[test]
fn scenario_a_reproduces_golden_combat_power() {
    assert_eq!(
        estimate(&scenario_a()),
        power("27814629", "33377555", "20560413", "7254216")
    );
}

#[test]
fn scenario_a_reads_chinese_identifiers_identically() {
    let chinese = BattleRecord {
        companion: "暗蚀国王".into(),
        set_card: "夜誓".into(),
        weapon: "专武".into(),
        ..scenario_a()
    };
    assert_eq!(estimate(&chinese), estimate(&scenario_a()));
}

#[test]
fn scenario_b_generic_weapon_uses_weapon_defaults() {
    let record = BattleRecord {
        weapon: "重剑".into(),
        ..scenario_a()
    };
    let stats = record.to_stats();
    let flow = Estimator.flow_for(&stats);

    assert!(flow.find(names::GREATSWORD_ACTIVE).is_some());
    assert!(flow.find(names::CROWNED_ACTIVE).is_none());
    assert!(flow.find(names::CROWNED_BASIC_ATTACK).is_none());
    assert!(flow.find(names::ACTIVE).is_none());
    let basic = flow.find(names::BASIC_ATTACK).expect("weapon basic attack");
    assert_eq!(basic.count, 11);
    assert_eq!(basic.damage_boost, 26.0 + 16.0);

    assert_eq!(
        Estimator.estimate_stats(&stats),
        power("22149632", "26579558", "14943323", "7206308")
    );
}

#[test]
fn scenario_c_stage_never_lowers_wildcard_boost() {
    let base = scenario_a().to_stats();
    for companion in CompanionId::ALL {
        for set_card in SetCardId::ALL {
            let wildcard = |stage: Stage| {
                let stats = Stats {
                    companion,
                    set_card,
                    stage,
                    ..base
                };
                set_cards::stage_buff_for(&stats)
                    .wildcard()
                    .map_or(0.0, |buff| buff.damage_boost)
            };
            let unset = wildcard(Stage::None);
            for stage in Stage::CONCRETE {
                assert!(
                    wildcard(stage) >= unset,
                    "{companion} on {set_card} at {}",
                    stage.as_str()
                );
            }
        }
    }
}

#[test]
fn blank_or_zero_total_level_scores_as_480() {
    let explicit = BattleRecord {
        total_level: DEFAULT_TOTAL_LEVEL.to_string(),
        ..scenario_a()
    };
    for raw in ["", "0"] {
        let record = BattleRecord {
            total_level: raw.into(),
            ..scenario_a()
        };
        assert_eq!(record.to_stats().total_level, 480);
        assert_eq!(estimate(&record), estimate(&explicit));
    }
}

#[test]
fn estimate_is_deterministic_for_every_companion() {
    for companion in CompanionId::ALL {
        let record = BattleRecord {
            companion: companion.name().into(),
            ..scenario_a()
        };
        let first = estimate(&record);
        assert_eq!(first, estimate(&record), "{companion}");
        assert!(first.score.parse::<i64>().is_ok(), "{companion}");
    }
}

#[test]
fn default_weaken_rate_follows_matching() {
    for (matching, rate) in [("顺", 0.5), ("逆", 0.25), ("", 0.25)] {
        let record = BattleRecord {
            matching: matching.into(),
            companion: "unknown".into(),
            ..scenario_a()
        };
        let stats = record.to_stats();
        let flow = companion_for(stats.companion).build_flow(&stats);
        assert_eq!(flow.periods()[0].weaken_rate, rate, "matching {matching:?}");
    }
}

#[test]
fn exempt_and_oath_skills_route_to_one_window() {
    let stats = Stats {
        attack: 5000,
        crit_rate: 50.0,
        crit_dmg: 200.0,
        matching: Matching::Favorable,
        ..Stats::default()
    };
    let period = Period::new(Vec::new(), 0.8);

    let resonance = Skill {
        attack_rate: 500.0,
        ..Skill::resonance()
    };
    assert_eq!(score_skill(&resonance, &period, &stats).weaken, 0.0);

    for name in names::OATH_TYPES {
        let oath = Skill {
            attack_rate: 1000.0,
            count: 1,
            can_crit: true,
            ..Skill::named(name)
        };
        let contribution = score_skill(&oath, &period, &stats);
        assert_eq!(contribution.non_weaken, 0.0, "{name}");
        assert!(contribution.weaken > 0.0, "{name}");
    }
}

#[test]
fn wildcard_and_named_buffs_stack() {
    let mut flow = CompanionFlow::single(Period::new(
        vec![Skill::active().with_count(4), Skill::support().with_count(6)],
        0.5,
    ));
    let buff = StageBuff::from_entries(&[
        (BuffTarget::All, SkillBuff::damage(8.0).and_count(0.5)),
        (BuffTarget::Skill(names::ACTIVE), SkillBuff::damage(25.0).and_count(1.5)),
    ]);
    apply_stage_buff(&mut flow, &buff);

    let active = flow.find(names::ACTIVE).expect("active");
    assert_eq!(active.damage_boost, 33.0);
    assert_eq!(active.count, 6);
    let support = flow.find(names::SUPPORT).expect("support");
    assert_eq!(support.damage_boost, 8.0);
    assert_eq!(support.count, 6);
}

#[test]
fn level_curve_has_positive_floor() {
    assert_eq!(level_defense_ratio(0, 0.0), 1.0);
    let full_reduction = level_defense_ratio(480, 100.0);
    assert!((full_reduction - (1.0 + 480.0 / 780.0)).abs() < 1e-12);
}

#[test]
fn multipliers_scale_buffed_score_only() {
    let plain = BattleRecord {
        matching_buff: "0".into(),
        ..scenario_a()
    };
    let boosted = BattleRecord {
        matching_buff: "20".into(),
        championships_buff: "40".into(),
        ..scenario_a()
    };
    let plain = estimate(&plain);
    let boosted = estimate(&boosted);
    assert_eq!(plain.score, boosted.score);
    assert_eq!(plain.weaken_score, boosted.weaken_score);
    let base: f64 = plain.score.parse().expect("score");
    let buffed: f64 = boosted.buffed_score.parse().expect("buffed");
    assert!((buffed - base * 1.2 * 1.4).abs() <= 2.0);
}
