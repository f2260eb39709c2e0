use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const RECORD: &str = r#"{
    "攻击": "11200", "生命": "210000", "防御": "5045",
    "对谱": "顺", "对谱加成": "20", "暴击": "65", "暴伤": "300",
    "虚弱增伤": "90", "誓约增伤": "40", "卡总等级": "300",
    "搭档身份": "暗蚀国王", "日卡": "夜誓", "阶数": "IV", "武器": "专武"
}"#;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_lysk-cp")
}

fn unique_temp_path(name: &str, ext: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("lysk-cp-{name}-{stamp}.{ext}"))
}

fn write_fixture(name: &str, ext: &str, contents: &str) -> PathBuf {
    let path = unique_temp_path(name, ext);
    fs::write(&path, contents).expect("fixture should be written");
    path
}

#[test]
fn missing_command_prints_usage() {
    let output = Command::new(bin()).output().expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: lysk-cp"));
}

#[test]
fn estimate_command_emits_combat_power_json() {
    let path = write_fixture("estimate", "json", RECORD);
    let output = Command::new(bin())
        .args(["estimate", path.to_string_lossy().as_ref()])
        .output()
        .expect("estimate should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("estimate should emit json");
    assert_eq!(payload["buffed_score"], "33377555");

    let _ = fs::remove_file(path);
}

#[test]
fn estimate_flow_flag_includes_rotation() {
    let path = write_fixture("flow", "json", RECORD);
    let output = Command::new(bin())
        .args(["estimate", path.to_string_lossy().as_ref(), "--flow"])
        .output()
        .expect("estimate should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("estimate should emit json");
    assert_eq!(payload["flow"]["periods"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["stats"]["companion"], "King of Darknight");

    let _ = fs::remove_file(path);
}

#[test]
fn estimate_command_returns_usage_without_path() {
    let output = Command::new(bin())
        .arg("estimate")
        .output()
        .expect("estimate should run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn batch_command_scores_csv_as_table() {
    let csv = "攻击,生命,防御,对谱,搭档身份,日卡,阶数,武器\n\
               11200,210000,5045,顺,暗蚀国王,夜誓,IV,专武\n\
               6483,148694,2830,逆,光猎,末夜,II,专武\n";
    let path = write_fixture("batch", "csv", csv);
    let output = Command::new(bin())
        .args(["batch", path.to_string_lossy().as_ref(), "--workers", "2", "--table"])
        .output()
        .expect("batch should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("index\t"));
    assert!(lines[1].starts_with("0\t"));
    assert!(lines[2].starts_with("1\t"));

    let _ = fs::remove_file(path);
}

#[test]
fn batch_command_rejects_unknown_format() {
    let path = write_fixture("batch", "txt", "nothing");
    let output = Command::new(bin())
        .args(["batch", path.to_string_lossy().as_ref()])
        .output()
        .expect("batch should run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("batch failed"));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_returns_non_zero_on_invalid_record() {
    let path = write_fixture("invalid", "json", r#"{"攻击": "0", "搭档身份": "暗蚀国王"}"#);
    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_passes_legal_record() {
    let path = write_fixture("valid", "json", RECORD);
    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("validation passed"));

    let _ = fs::remove_file(path);
}

#[test]
fn ruleset_command_dumps_yaml() {
    let output = Command::new(bin())
        .arg("ruleset")
        .output()
        .expect("ruleset should run");

    assert_eq!(output.status.code(), Some(0));
    let yaml: serde_yaml::Value =
        serde_yaml::from_slice(&output.stdout).expect("ruleset should be yaml");
    assert_eq!(yaml["set_cards"].as_sequence().map(Vec::len), Some(16));
    assert!(yaml["version"].as_str().is_some());
}
