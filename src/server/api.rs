//! JSON payload builders behind the HTTP routes.
//!
//! Every function takes the raw request body and returns the pretty JSON
//! response body, so the handlers stay thin and the payloads are testable
//! without a server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combat::engine::CombatPower;
use crate::data::import::{parse_records_json, ImportError};
use crate::data::record::BattleRecord;
use crate::data::validate::{validate_record, ValidationReport};
use crate::estimator::Estimator;
use crate::parallel::{evaluate_batch, score_batch, BatchEntry, WorkerPool};
use crate::ruleset::{companion_catalogue, CompanionEntry};
use crate::set_cards::{self, SetCardTable, RULESET_VERSION};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("invalid request body: {0}")]
    Import(#[from] ImportError),
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the caller sent a bad request rather than the server failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Import(_))
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub ruleset: &'static str,
    pub combat_power: CombatPower,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: usize,
    #[serde(flatten)]
    pub report: ValidationReport,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub ruleset: &'static str,
    pub results: Vec<BatchEntry>,
}

#[derive(Debug, Serialize)]
pub struct SetCardsResponse {
    pub ruleset: &'static str,
    pub set_cards: Vec<&'static SetCardTable>,
}

#[derive(Debug, Serialize)]
pub struct CompanionsResponse {
    pub ruleset: &'static str,
    pub companions: Vec<CompanionEntry>,
}

/// `/api/evaluate` takes a bare array or `{ "records": [...] }`.
#[derive(Debug, Deserialize)]
struct EvaluateRequest {
    records: Vec<BattleRecord>,
}

pub fn health_payload() -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "lysk-cp",
        "version": env!("CARGO_PKG_VERSION"),
        "ruleset": RULESET_VERSION,
    }))?)
}

pub fn estimate_payload(body: &str) -> Result<String, ApiError> {
    let record: BattleRecord = serde_json::from_str(body).map_err(ApiError::Parse)?;
    let response = EstimateResponse {
        ruleset: RULESET_VERSION,
        combat_power: Estimator.estimate(&record),
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

pub fn validate_payload(body: &str) -> Result<String, ApiError> {
    let record: BattleRecord = serde_json::from_str(body).map_err(ApiError::Parse)?;
    let report = validate_record(&record);
    let response = ValidateResponse {
        valid: !report.has_errors(),
        errors: report.error_count(),
        report,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

pub fn evaluate_payload(body: &str, pool: &WorkerPool) -> Result<String, ApiError> {
    let records = match serde_json::from_str::<EvaluateRequest>(body) {
        Ok(request) => request.records,
        Err(_) => parse_records_json(body)?,
    };
    let mut results = score_batch(&records, pool);
    evaluate_batch(&mut results);
    let response = EvaluateResponse {
        ruleset: RULESET_VERSION,
        results,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

pub fn companions_payload() -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&CompanionsResponse {
        ruleset: RULESET_VERSION,
        companions: companion_catalogue(),
    })?)
}

pub fn set_cards_payload() -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&SetCardsResponse {
        ruleset: RULESET_VERSION,
        set_cards: set_cards::all_tables().collect(),
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_rejects_malformed_json() {
        let err = estimate_payload("{not json").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn estimate_returns_combat_power() {
        let body = r#"{"攻击": "11200", "生命": "210000", "搭档身份": "暗蚀国王", "日卡": "夜誓", "阶数": "IV", "武器": "专武"}"#;
        let payload: serde_json::Value =
            serde_json::from_str(&estimate_payload(body).expect("estimate")).expect("json");
        assert_eq!(payload["ruleset"], RULESET_VERSION);
        assert!(payload["combat_power"]["buffed_score"].as_str().is_some());
    }

    #[test]
    fn validate_reports_errors() {
        let payload: serde_json::Value =
            serde_json::from_str(&validate_payload(r#"{"attack": "-1"}"#).expect("validate"))
                .expect("json");
        assert_eq!(payload["valid"], false);
        assert!(payload["errors"].as_u64().unwrap_or(0) > 0);
        assert!(payload["diagnostics"].as_array().is_some());
    }

    #[test]
    fn evaluate_accepts_array_or_wrapped_records() {
        let pool = WorkerPool::default();
        let bare = evaluate_payload(r#"[{"attack": "100"}, {"attack": "200"}]"#, &pool).expect("bare");
        let wrapped = evaluate_payload(r#"{"records": [{"attack": "100"}, {"attack": "200"}]}"#, &pool)
            .expect("wrapped");
        assert_eq!(bare, wrapped);
    }
}
