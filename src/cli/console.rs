//! Boxed console text: welcome banner, catalog listing and profile summary.
use std::io::{self, Write};

use crate::profile::{ProfileCatalog, UserProfile};

/// Characters between the two `|` borders.
const INNER_WIDTH: usize = 39;
const RULE: &str = "+---------------------------------------+";

pub const ENTER_PROFILE_ID: &str = "Enter profile id or press q to exit: ";
pub const RETRY_PROFILE_ID: &str = "Invalid profile id, please try again or press q to quit: ";
pub const TERMINATED: &str = "The script has been terminated.";
pub const NOT_IMPLEMENTED: &str = "This feature has not been implemented yet.";
pub const STARTED: &str = "The script has been started.";

pub fn write_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "|   Welcome to use RF4 fishing script   |")?;
    writeln!(out, "|     Please select a configuration     |")?;
    writeln!(out, "{RULE}")
}

/// One `| <id>. <name> |` row per entry, placeholder included.
pub fn write_catalog(out: &mut impl Write, catalog: &ProfileCatalog) -> io::Result<()> {
    for (index, entry) in catalog.entries().iter().enumerate() {
        let label = format!("{index}. {}", entry.name());
        writeln!(out, "{}", boxed_row(&label))?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

/// Every profile field, one boxed row each.
pub fn write_profile_summary(out: &mut impl Write, profile: &UserProfile) -> io::Result<()> {
    let rows = [
        ("Profile name", profile.name().to_string()),
        ("Reel name", profile.reel_name().to_string()),
        ("Fishing strategy", profile.fishing_strategy().to_string()),
        ("Keep strategy", profile.keep_strategy().as_str().to_string()),
        (
            "Current number of fish",
            profile.current_fish_count().to_string(),
        ),
        (
            "Retrieval duration (s)",
            profile.retrieval_duration_second().to_string(),
        ),
        (
            "Retrieval delay (s)",
            profile.retrieval_delay_second().to_string(),
        ),
    ];

    writeln!(out, "{RULE}")?;
    for (label, value) in rows {
        writeln!(out, "{}", boxed_row(&format!("{label}: {value}")))?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

fn boxed_row(text: &str) -> String {
    // Overlong text widens the row instead of being cut.
    let width = INNER_WIDTH - 2;
    format!("| {text:<width$} |")
}
