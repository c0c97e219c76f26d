use super::*;
use assert_cmd::cargo_bin_cmd;
use std::fs;
use std::os::unix::process::ExitStatusExt;

const SIGABRT: i32 = 6;

#[test]
fn test_binary_default_run_leaks() {
	cargo_bin_cmd!("keyleak").assert().success().stdout("abcsecret!\n-1\n");
}

#[test]
fn test_binary_valid_key_prints_length_only() {
	cargo_bin_cmd!("keyleak")
		.args(["--public", VALID_KEY])
		.assert()
		.success()
		.stdout("64\n");
}

#[test]
fn test_binary_logs_stay_off_stdout() {
	cargo_bin_cmd!("keyleak")
		.arg("--verbose")
		.env("KEYLEAK_LOG", "trace")
		.assert()
		.success()
		.stdout("abcsecret!\n-1\n");
}

#[test]
fn test_binary_empty_public_key_aborts() {
	let assert = cargo_bin_cmd!("keyleak").args(["--public", ""]).assert().failure().stdout("");
	assert_eq!(assert.get_output().status.signal(), Some(SIGABRT));
}

#[test]
fn test_binary_empty_private_key_in_config_aborts() {
	let tempdir = tempfile::tempdir().unwrap();
	let config = tempdir.path().join("keys.toml");
	fs::write(&config, "[keys]\nprivate = \"\"\n").unwrap();

	let assert = cargo_bin_cmd!("keyleak")
		.arg("--config")
		.arg(&config)
		.assert()
		.failure()
		.stdout("");
	assert_eq!(assert.get_output().status.signal(), Some(SIGABRT));
}

#[test]
fn test_binary_config_file() {
	let tempdir = tempfile::tempdir().unwrap();
	let config = tempdir.path().join("keys.toml");
	fs::write(&config, "[keys]\npublic = \"short\"\nprivate = \"hunter2\"\n").unwrap();

	cargo_bin_cmd!("keyleak")
		.arg("--config")
		.arg(&config)
		.assert()
		.success()
		.stdout("hunter2\n-1\n");
}

#[test]
fn test_binary_missing_config() {
	cargo_bin_cmd!("keyleak")
		.args(["--config", "/nonexistent/keys.toml"])
		.assert()
		.code(1)
		.stdout("");
}

#[test]
fn test_binary_help() {
	cargo_bin_cmd!("keyleak").arg("--help").assert().success();
}

#[test]
fn test_binary_unknown_flag() {
	cargo_bin_cmd!("keyleak").arg("--bogus").assert().code(1);
}
