use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn missing_elements_field_is_actionable() {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("kbtk_missing_fields_{pid}_{nanos}.json"));

    fs::write(&path, r#"{ "blocks": [ {"text": "<input_RPPH>"} ] }"#).unwrap();

    let mut cmd = cargo_bin_cmd!("kbtk");
    cmd.args(["inspect", path.to_str().unwrap()]);

    cmd.assert()
        .code(1)
        .stderr(contains("missing required top-level field(s): elements"))
        .stderr(contains("Required top-level fields: elements"));

    let _ = fs::remove_file(&path);
}
