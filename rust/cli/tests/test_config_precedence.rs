//! Layering of defaults, config file, environment and command-line flags.

use serde_json::Value;
use serial_test::serial;

const VARS: &[&str] = &[
    "ARCANA_CONFIG",
    "ARCANA_SEED",
    "ARCANA_REVERSAL_PROBABILITY",
    "ARCANA_SHUFFLE",
    "ARCANA_SELECTION",
    "ARCANA_DATA_DIR",
];

fn clear_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

fn set_env(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = arcana_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, out, _) = run(&["arcana", "cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], Value::Null);
    assert_eq!(json["reversal_probability"]["value"], 0.5);
    assert_eq!(json["shuffle"]["value"], "secure");
    assert_eq!(json["selection"]["value"], "random");
    for key in ["seed", "reversal_probability", "shuffle", "selection", "data_dir"] {
        assert_eq!(json[key]["source"], "default", "{}", key);
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arcana.toml");
    std::fs::write(
        &path,
        "seed = 7\nreversal_probability = 0.1\nshuffle = \"simple\"\n",
    )
    .unwrap();
    set_env("ARCANA_CONFIG", path.to_str().unwrap());
    set_env("ARCANA_SEED", "11");

    let (code, out, _) = run(&["arcana", "cfg"]);
    clear_env();

    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], 11);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["reversal_probability"]["value"], 0.1);
    assert_eq!(json["reversal_probability"]["source"], "file");
    assert_eq!(json["shuffle"]["value"], "simple");
    assert_eq!(json["shuffle"]["source"], "file");
    assert_eq!(json["selection"]["source"], "default");
}

#[test]
#[serial]
fn flags_override_environment() {
    clear_env();
    set_env("ARCANA_SEED", "1");
    let (_, env_only, _) = run(&["arcana", "draw", "--count", "5"]);
    let (_, flagged, _) = run(&["arcana", "draw", "--count", "5", "--seed", "2"]);
    clear_env();
    let (_, explicit, _) = run(&["arcana", "draw", "--count", "5", "--seed", "2"]);
    let (_, env_equiv, _) = run(&["arcana", "draw", "--count", "5", "--seed", "1"]);

    assert_eq!(flagged, explicit);
    assert_eq!(env_only, env_equiv);
}

#[test]
#[serial]
fn env_reversal_probability_of_one_reverses_everything() {
    clear_env();
    set_env("ARCANA_REVERSAL_PROBABILITY", "1");
    let (code, out, _) = run(&["arcana", "read", "--spread", "horseshoe", "--json"]);
    clear_env();

    assert_eq!(code, 0);
    let value: Value = serde_json::from_str(&out).unwrap();
    for dc in value["drawn_cards"].as_array().unwrap() {
        assert_eq!(dc["is_reversed"], true);
    }
}

#[test]
#[serial]
fn invalid_env_fails_commands_with_config_error() {
    clear_env();
    set_env("ARCANA_SELECTION", "bottom");
    let (cfg_code, _, cfg_err) = run(&["arcana", "cfg"]);
    let (read_code, read_out, read_err) = run(&["arcana", "read"]);
    clear_env();

    assert_eq!(cfg_code, 2);
    assert_eq!(cfg_err.matches("Error:").count(), 1, "stderr: {}", cfg_err);
    assert_eq!(read_code, 2);
    assert!(read_out.is_empty());
    assert!(read_err.contains("Configuration error"));
}
