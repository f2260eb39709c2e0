use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use lysk_cp::server::api;
use lysk_cp::server::routes::{router, AppState};
use tower::ServiceExt;

const RECORD: &str = r#"{"攻击": "11200", "生命": "210000", "防御": "5045", "对谱": "顺",
    "对谱加成": "20", "暴击": "65", "暴伤": "300", "虚弱增伤": "90", "誓约增伤": "40",
    "卡总等级": "300", "搭档身份": "暗蚀国王", "日卡": "夜誓", "阶数": "IV", "武器": "专武"}"#;

async fn call(method: &str, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    let response = router(AppState::default())
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let payload = serde_json::from_slice(&bytes).expect("response should be valid json");
    (status, payload)
}

#[test]
fn health_payload_reports_ok() {
    let payload: serde_json::Value =
        serde_json::from_str(&api::health_payload().expect("health")).expect("json");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["service"], "lysk-cp");
}

#[tokio::test]
async fn health_endpoint_returns_ok_json() {
    let (status, payload) = call("GET", "/api/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["status"], "ok");
}

#[tokio::test]
async fn estimate_endpoint_scores_record() {
    let (status, payload) = call("POST", "/api/estimate", RECORD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["combat_power"]["score"], "27814629");
    assert_eq!(payload["combat_power"]["buffed_score"], "33377555");
}

#[tokio::test]
async fn estimate_endpoint_rejects_malformed_json() {
    let (status, payload) = call("POST", "/api/estimate", "{\"攻击\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["status"], "error");
    assert!(payload["message"]
        .as_str()
        .unwrap_or_default()
        .contains("invalid request body"));
}

#[tokio::test]
async fn validate_endpoint_lists_diagnostics() {
    let (status, payload) = call("POST", "/api/validate", r#"{"攻击": "99999"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["valid"], false);
    let diagnostics = payload["diagnostics"].as_array().expect("diagnostics array");
    assert!(diagnostics
        .iter()
        .any(|diag| diag["context"] == "attack" && diag["severity"] == "error"));
}

#[tokio::test]
async fn evaluate_endpoint_labels_level_groups() {
    let records: Vec<serde_json::Value> = (1..=6)
        .map(|i| {
            serde_json::json!({
                "攻击": (i * 1500).to_string(),
                "生命": "150000",
                "对谱": "顺",
                "搭档身份": "暗蚀国王",
                "日卡": "夜誓",
                "阶数": "II",
                "武器": "专武",
                "关卡": "光",
                "关数": "120_上",
                "模式": "稳定",
            })
        })
        .collect();
    let body = serde_json::to_string(&records).expect("body");
    let (status, payload) = call("POST", "/api/evaluate", &body).await;
    assert_eq!(status, StatusCode::OK);

    let results = payload["results"].as_array().expect("results array");
    assert_eq!(results.len(), 6);
    assert_eq!(results[0]["index"], 0);
    assert_eq!(results[0]["level_key"], "光-120_上-稳定");
    assert_eq!(results[0]["combat_power"]["evaluation"], "极限");
    assert_eq!(results[5]["combat_power"]["evaluation"], "溢出");
}

#[tokio::test]
async fn catalogue_endpoints_expose_ruleset() {
    let (status, companions) = call("GET", "/api/companions", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(companions["companions"].as_array().map(Vec::len), Some(26));

    let (status, set_cards) = call("GET", "/api/set-cards", "").await;
    assert_eq!(status, StatusCode::OK);
    let cards = set_cards["set_cards"].as_array().expect("set cards");
    assert_eq!(cards.len(), 16);
    assert_eq!(cards[0]["id"], "Night Vow");
    assert_eq!(cards[0]["stages"]["IV"]["all"]["damage_boost"], 16.0);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, payload) = call("GET", "/api/records", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(payload["status"], "error");
}
