use holdem_cli::config::{AI_ENV, CONFIG_ENV, SEED_ENV, STACK_ENV};
use holdem_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    for key in [CONFIG_ENV, SEED_ENV, STACK_ENV, AI_ENV] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run_capture(&["holdem", "cfg"]);
    assert_eq!(code, 0, "stderr: {err}");
    serde_json::from_str(&out).unwrap()
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(1000));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("default"));
    assert_eq!(json["small_blind"]["value"].as_u64(), Some(5));
    assert_eq!(json["big_blind"]["value"].as_u64(), Some(10));
    assert_eq!(json["min_raise"]["value"].as_u64(), Some(20));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["ai"]["value"].as_str(), Some("baseline"));
}

#[test]
#[serial]
fn file_values_are_reported_with_file_source() {
    clear_env();
    let file = config_file("starting_stack = 500\nseed = 8\nai = \"passive\"\n");
    unsafe {
        std::env::set_var(CONFIG_ENV, file.path());
    }
    let json = cfg_json();
    clear_env();

    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(500));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(8));
    assert_eq!(json["ai"]["source"].as_str(), Some("file"));
    assert_eq!(json["big_blind"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = config_file("seed = 8\n");
    unsafe {
        std::env::set_var(CONFIG_ENV, file.path());
        std::env::set_var(SEED_ENV, "21");
        std::env::set_var(STACK_ENV, "750");
    }
    let json = cfg_json();
    clear_env();

    assert_eq!(json["seed"]["value"].as_u64(), Some(21));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(750));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("env"));
}

#[test]
#[serial]
fn seed_flag_overrides_config_seed() {
    clear_env();
    unsafe {
        std::env::set_var(SEED_ENV, "5");
    }
    let (code, from_env, _) = run_capture(&["holdem", "sim", "--rounds", "1"]);
    assert_eq!(code, 0);
    assert!(from_env.contains("seed=5"));

    let (code, from_flag, _) = run_capture(&["holdem", "sim", "--rounds", "1", "--seed", "6"]);
    clear_env();
    assert_eq!(code, 0);
    assert!(from_flag.contains("seed=6"));
}

#[test]
#[serial]
fn invalid_env_seed_exits_2() {
    clear_env();
    unsafe {
        std::env::set_var(SEED_ENV, "not-a-number");
    }
    let (code, _, err) = run_capture(&["holdem", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("Configuration error"));
    assert!(err.contains(SEED_ENV));
}

#[test]
#[serial]
fn unknown_ai_and_bad_file_are_config_errors() {
    clear_env();
    unsafe {
        std::env::set_var(AI_ENV, "oracle");
    }
    let (code, _, err) = run_capture(&["holdem", "sim", "--rounds", "1"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("oracle"));

    let file = config_file("big_blind = \"ten\"\n");
    unsafe {
        std::env::set_var(CONFIG_ENV, file.path());
    }
    let (code, _, err) = run_capture(&["holdem", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn configured_stack_is_used_by_sim() {
    clear_env();
    unsafe {
        std::env::set_var(STACK_ENV, "300");
        std::env::set_var(AI_ENV, "passive");
    }
    let (code, out, _) = run_capture(&["holdem", "sim", "--rounds", "1", "--seed", "2"]);
    clear_env();
    assert_eq!(code, 0);
    let stacks = out
        .lines()
        .find_map(|l| l.strip_prefix("Stacks: "))
        .unwrap();
    let total: u32 = stacks
        .split_whitespace()
        .filter_map(|s| s.split_once('=').and_then(|(_, v)| v.parse::<u32>().ok()))
        .sum();
    assert_eq!(total, 600);
}
