use anyhow::Result;
use serde_json::Value;

use crate::common::{fixture, run_launcher, stderr_of, stdout_of};

#[test]
fn pid_and_fish_count_start_session_without_prompt() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_valid.ini"),
        &["--pid", "1", "--fish-count", "3"],
        "",
    )?;

    let stdout = stdout_of(&output);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(!stdout.contains("Enter profile id"), "stdout: {stdout}");
    assert!(stdout.contains("Profile name: spinning"), "stdout: {stdout}");
    assert!(
        stdout.contains("The script has been started."),
        "stdout: {stdout}"
    );

    let handoff = stdout.lines().last().unwrap_or_default();
    let profile: Value = serde_json::from_str(handoff)?;
    assert_eq!(profile["name"], "spinning");
    assert_eq!(profile["reel_name"], "Syberia 5000");
    assert_eq!(profile["keep_strategy"], "all");
    assert_eq!(profile["current_fish_count"], 3);
    assert_eq!(profile["retrieval_duration_second"], 2.5);
    assert_eq!(profile["retrieval_delay_second"], 1.0);
    Ok(())
}

#[test]
fn marked_flag_overrides_all() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_valid.ini"),
        &["-p", "2", "-a", "-m"],
        "",
    )?;

    let stdout = stdout_of(&output);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("Keep strategy: marked"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn fish_count_at_keepnet_limit_exits_with_usage_error() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_valid.ini"),
        &["--pid", "1", "--fish-count", "100"],
        "",
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr_of(&output).contains("Invalid fish count 100"),
        "stderr: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).is_empty(), "no profile output expected");
    Ok(())
}

#[test]
fn out_of_range_pid_exits_with_usage_error() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_valid.ini"),
        &["--pid", "4"],
        "1\n",
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        !stdout_of(&output).contains("Enter profile id"),
        "invalid CLI ids never fall back to prompting"
    );
    Ok(())
}

#[test]
fn missing_game_section_exits_with_config_error() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_missing_game.ini"),
        &[],
        "q\n",
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("missing `game`"),
        "stderr: {}",
        stderr_of(&output)
    );
    assert!(
        stdout_of(&output).is_empty(),
        "config errors precede prompting"
    );
    Ok(())
}

#[test]
fn profile_without_reel_name_exits_with_config_error() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_missing_reel.ini"),
        &["--pid", "1"],
        "",
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("missing `reel_name`"),
        "stderr: {}",
        stderr_of(&output)
    );
    Ok(())
}

#[test]
fn pid_zero_reports_unavailable_feature() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_valid.ini"),
        &["-p", "0"],
        "",
    )?;

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("This feature has not been implemented yet."));
    Ok(())
}

#[test]
fn section_names_and_values_reach_the_session_unchanged() -> Result<()> {
    let config = fixture("tests/fixtures/config_mixed_names.ini");

    let output = run_launcher(&config, &["--pid", "1"], "")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Profile name: ProfileA"), "stdout: {stdout}");
    let profile: Value = serde_json::from_str(stdout.lines().last().unwrap_or_default())?;
    assert_eq!(profile["name"], "ProfileA");
    assert_eq!(profile["reel_name"], "\"Reel X\"");

    let output = run_launcher(&config, &["--pid", "2"], "")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let profile: Value = serde_json::from_str(stdout_of(&output).lines().last().unwrap_or_default())?;
    assert_eq!(profile["name"], "bottom.trophy");
    assert_eq!(profile["reel_name"], "C:\\reels\\x");

    let output = run_launcher(&config, &["--pid", "3"], "")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let profile: Value = serde_json::from_str(stdout_of(&output).lines().last().unwrap_or_default())?;
    assert_eq!(profile["name"], "a[0]");
    Ok(())
}
