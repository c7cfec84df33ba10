use std::fs;
use tempfile::tempdir;

use statusmsg_cli::{commands::encode, StateKind};
use statusmsg_core::{decoder::decode_state_base64, deserialize, StatusEntry, UserProfile};

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

#[test]
fn encode_message_to_file() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.b64");

    let input = r#"{
      "records": [
        {"k": "alice.testnet", "v": "hello"},
        {"k": "bob.testnet", "v": ""}
      ]
    }"#;
    write_file(&in_path, input);

    let encoded = encode::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        StateKind::Message,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&out_path).unwrap(), encoded);
    assert_eq!(
        encoded,
        "AgAAAA0AAABhbGljZS50ZXN0bmV0BQAAAGhlbGxvCwAAAGJvYi50ZXN0bmV0AAAAAA=="
    );

    let message = deserialize(&encoded).unwrap();
    assert_eq!(message.len(), 2);
}

#[test]
fn encode_rejects_empty_key() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("bad.json");
    write_file(&in_path, r#"{"records":[{"k":"","v":"x"}]}"#);

    let err = encode::execute(in_path.to_str().unwrap(), None, StateKind::Message).unwrap_err();
    assert!(format!("{:#}", err).contains("Record key (k) must be a non-empty string"));
}

#[test]
fn encode_rejects_non_message_json() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("array.json");
    write_file(&in_path, r#"[{"k":"alice.testnet","v":"x"}]"#);

    let err = encode::execute(in_path.to_str().unwrap(), None, StateKind::Message).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid input type"));
}

#[test]
fn encode_entry_and_profile() {
    let td = tempdir().unwrap();

    let entry_path = td.path().join("entry.json");
    write_file(
        &entry_path,
        r#"{"message":"brb","timestamp":100,"expires_at":200}"#,
    );
    let encoded = encode::execute(entry_path.to_str().unwrap(), None, StateKind::Entry).unwrap();
    assert_eq!(encoded, "AwAAAGJyYmQAAAAAAAAAAcgAAAAAAAAA");
    let entry: StatusEntry = decode_state_base64(&encoded).unwrap();
    assert_eq!(entry.expires_at, Some(200));

    let profile_path = td.path().join("profile.json");
    write_file(
        &profile_path,
        r#"{"name":"Alice","bio":"Blockchain enthusiast","is_public":true}"#,
    );
    let encoded =
        encode::execute(profile_path.to_str().unwrap(), None, StateKind::Profile).unwrap();
    let profile: UserProfile = decode_state_base64(&encoded).unwrap();
    assert_eq!(profile.name, "Alice");
}

#[test]
fn encode_entry_rejects_past_expiry() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("entry.json");
    write_file(
        &in_path,
        r#"{"message":"brb","timestamp":100,"expires_at":50}"#,
    );

    assert!(encode::execute(in_path.to_str().unwrap(), None, StateKind::Entry).is_err());
}

#[test]
fn encode_missing_file() {
    let result = encode::execute("/nonexistent/in.json", None, StateKind::Message);
    assert!(result.is_err());
}
