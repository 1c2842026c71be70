use anyhow::Result;

use crate::common::{fixture, run_launcher, stdout_of};

#[test]
fn listing_includes_placeholder_and_profiles_in_file_order() -> Result<()> {
    let output = run_launcher(&fixture("tests/fixtures/config_valid.ini"), &[], "q\n")?;
    let stdout = stdout_of(&output);

    let positions: Vec<usize> = [
        "0. edit custom configuration",
        "1. spinning",
        "2. bottom",
        "3. float",
    ]
    .iter()
    .map(|needle| {
        stdout
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing from:\n{stdout}"))
    })
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(
        !stdout.contains("marina"),
        "sections without fishing_strategy are hidden"
    );
    Ok(())
}

#[test]
fn invalid_then_quit_terminates_cleanly() -> Result<()> {
    let output = run_launcher(&fixture("tests/fixtures/config_valid.ini"), &[], "x\nq\n")?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert_eq!(stdout.matches("Invalid profile id").count(), 1);
    assert!(stdout.contains("The script has been terminated."));
    assert!(!stdout.contains("Profile name:"), "no profile is built");
    Ok(())
}

#[test]
fn interactive_selection_starts_session() -> Result<()> {
    let output = run_launcher(
        &fixture("tests/fixtures/config_valid.ini"),
        &["-n", "7"],
        "9\n3\n",
    )?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("Profile name: float"), "stdout: {stdout}");
    assert!(
        stdout.contains("Current number of fish: 7"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("Retrieval duration (s): 0"),
        "unparsable durations default to zero: {stdout}"
    );
    Ok(())
}

#[test]
fn closed_stdin_exits_with_error() -> Result<()> {
    let output = run_launcher(&fixture("tests/fixtures/config_valid.ini"), &[], "")?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
