use std::fs;

use crate::config::AppConfig;
use crate::data::import::{load_records, parse_records_json};
use crate::data::record::BattleRecord;
use crate::data::validate::validate_record;
use crate::estimator::Estimator;
use crate::parallel::{evaluate_batch, score_batch, WorkerPool};
use crate::ruleset::Ruleset;
use crate::server;

const USAGE: &str = "usage: lysk-cp <serve|estimate|batch|validate|ruleset>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Estimate,
    Batch,
    Validate,
    Ruleset,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("estimate") => Some(Command::Estimate),
        Some("batch") => Some(Command::Batch),
        Some("validate") => Some(Command::Validate),
        Some("ruleset") => Some(Command::Ruleset),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let config = AppConfig::from_env();
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(&config),
        Some(Command::Estimate) => handle_estimate(args),
        Some(Command::Batch) => handle_batch(args, &config),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Ruleset) => handle_ruleset(),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_serve(config: &AppConfig) -> i32 {
    match server::run_server(&config.bind_addr, WorkerPool::with_workers(config.workers)) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_estimate(args: &[String]) -> i32 {
    let Some(path) = args.get(2).filter(|arg| !arg.starts_with("--")) else {
        eprintln!("usage: lysk-cp estimate <record.json> [--flow]");
        return 2;
    };
    let record = match read_single_record(path) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("estimate failed: {err}");
            return 1;
        }
    };

    let estimator = Estimator::new();
    let result = if has_flag(args, "--flow") {
        let stats = record.to_stats();
        serde_json::to_string_pretty(&serde_json::json!({
            "stats": stats,
            "flow": estimator.flow_for(&stats),
            "combat_power": estimator.estimate_stats(&stats),
        }))
    } else {
        serde_json::to_string_pretty(&estimator.estimate(&record))
    };
    print_json(result, "estimate")
}

fn handle_batch(args: &[String], config: &AppConfig) -> i32 {
    let Some(path) = args.get(2).filter(|arg| !arg.starts_with("--")) else {
        eprintln!("usage: lysk-cp batch <records.json|csv|xlsx> [--workers N] [--table]");
        return 2;
    };
    let workers = match flag_value(args, "--workers") {
        Some(raw) => match raw.parse::<usize>() {
            Ok(workers) => workers,
            Err(_) => {
                eprintln!("invalid --workers '{raw}'");
                return 2;
            }
        },
        None => config.workers,
    };

    let records = match load_records(path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("batch failed: {err}");
            return 1;
        }
    };
    let mut entries = score_batch(&records, &WorkerPool::with_workers(workers));
    evaluate_batch(&mut entries);

    if has_flag(args, "--table") {
        println!("index\tlevel\tscore\tbuffed_score\tweaken_score\tnon_weaken_score\tevaluation\terrors");
        for entry in &entries {
            let power = &entry.combat_power;
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                entry.index,
                entry.level_key,
                power.score,
                power.buffed_score,
                power.weaken_score,
                power.non_weaken_score,
                power.evaluation.as_deref().unwrap_or("-"),
                entry.validation_errors
            );
        }
        0
    } else {
        print_json(serde_json::to_string_pretty(&entries), "batch result")
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: lysk-cp validate <record.json>");
        return 2;
    };
    let record = match read_single_record(path) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("validate failed: {err}");
            return 1;
        }
    };

    let report = validate_record(&record);
    for diag in &report.diagnostics {
        eprintln!("[{}] {}: {}", diag.severity, diag.context, diag.message);
    }
    if report.has_errors() {
        eprintln!("validation failed: {} error(s)", report.error_count());
        1
    } else {
        println!("validation passed: {path}");
        0
    }
}

fn handle_ruleset() -> i32 {
    match serde_yaml::to_string(&Ruleset::current()) {
        Ok(yaml) => {
            print!("{yaml}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize ruleset: {err}");
            1
        }
    }
}

/// First record of a JSON file holding one record or an array.
fn read_single_record(path: &str) -> Result<BattleRecord, String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("unable to read '{path}': {err}"))?;
    parse_records_json(&raw)
        .map_err(|err| format!("unable to parse '{path}': {err}"))?
        .into_iter()
        .next()
        .ok_or_else(|| format!("'{path}' holds no records"))
}

fn print_json(result: Result<String, serde_json::Error>, what: &str) -> i32 {
    match result {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize {what}: {err}");
            1
        }
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}
