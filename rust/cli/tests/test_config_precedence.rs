use std::io::Write as _;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use rochambot_cli::run;

static ENV_GUARD: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        unsafe {
            if let Some(prev) = &self.previous {
                std::env::set_var(self.key, prev);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }
}

fn cfg_json(out: &[u8]) -> serde_json::Value {
    serde_json::from_slice(out).expect("cfg output is JSON")
}

#[test]
fn file_values_override_defaults() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cleared = [
        TempEnvVar::unset("ROCHAMBOT_SEED"),
        TempEnvVar::unset("ROCHAMBOT_COUNTDOWN_MS"),
        TempEnvVar::unset("ROCHAMBOT_REVEAL_MS"),
        TempEnvVar::unset("ROCHAMBOT_THRESHOLD"),
        TempEnvVar::unset("ROCHAMBOT_SOUND"),
    ];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "countdown_ms = 500").unwrap();
    writeln!(file, "win_threshold = 3").unwrap();
    writeln!(file, "seed = 9").unwrap();
    let _cfg = TempEnvVar::set("ROCHAMBOT_CONFIG", file.path().to_str().unwrap());

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["rochambot", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));

    let json = cfg_json(&out);
    assert_eq!(json["countdown_ms"]["value"].as_u64(), Some(500));
    assert_eq!(json["countdown_ms"]["source"].as_str(), Some("file"));
    assert_eq!(json["win_threshold"]["value"].as_u64(), Some(3));
    assert_eq!(json["seed"]["value"].as_u64(), Some(9));
    // keys the file does not mention keep their defaults
    assert_eq!(json["reveal_ms"]["value"].as_u64(), Some(1_000));
    assert_eq!(json["reveal_ms"]["source"].as_str(), Some("default"));
}

#[test]
fn env_overrides_file() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cleared = [
        TempEnvVar::unset("ROCHAMBOT_COUNTDOWN_MS"),
        TempEnvVar::unset("ROCHAMBOT_REVEAL_MS"),
        TempEnvVar::unset("ROCHAMBOT_THRESHOLD"),
        TempEnvVar::unset("ROCHAMBOT_SOUND"),
    ];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 9").unwrap();
    let _cfg = TempEnvVar::set("ROCHAMBOT_CONFIG", file.path().to_str().unwrap());
    let _seed = TempEnvVar::set("ROCHAMBOT_SEED", "77");

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["rochambot", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0);

    let json = cfg_json(&out);
    assert_eq!(json["seed"]["value"].as_u64(), Some(77));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
}

#[test]
fn invalid_values_are_rejected() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cleared = [
        TempEnvVar::unset("ROCHAMBOT_CONFIG"),
        TempEnvVar::unset("ROCHAMBOT_SEED"),
        TempEnvVar::unset("ROCHAMBOT_COUNTDOWN_MS"),
        TempEnvVar::unset("ROCHAMBOT_REVEAL_MS"),
        TempEnvVar::unset("ROCHAMBOT_SOUND"),
    ];
    let _threshold = TempEnvVar::set("ROCHAMBOT_THRESHOLD", "0");

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["rochambot", "cfg"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("win_threshold"));
}

#[test]
fn unparseable_env_numbers_are_rejected() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cleared = [
        TempEnvVar::unset("ROCHAMBOT_CONFIG"),
        TempEnvVar::unset("ROCHAMBOT_COUNTDOWN_MS"),
        TempEnvVar::unset("ROCHAMBOT_REVEAL_MS"),
        TempEnvVar::unset("ROCHAMBOT_THRESHOLD"),
        TempEnvVar::unset("ROCHAMBOT_SOUND"),
    ];
    let _seed = TempEnvVar::set("ROCHAMBOT_SEED", "not-a-number");

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["rochambot", "cfg"], &mut out, &mut err);
    assert_eq!(code, 2);
}
