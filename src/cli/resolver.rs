//! Turn command-line flags or interactive answers into a validated profile.
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::{args::LaunchRequest, console};
use crate::{
    app::config::GameSettings,
    lib::errors::{InvalidArgument, LaunchError},
    profile::{
        build_profile, is_fish_count_valid, is_profile_id_valid, ProfileCatalog, UserProfile,
        QUIT_SENTINEL,
    },
};

/// Outcome of profile resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A profile was selected and built.
    Continue(UserProfile),
    /// The user asked to quit.
    Cancelled,
    /// The custom-configuration entry was chosen; it is not available yet.
    Unavailable,
}

/// What a validated profile id points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Quit,
    CustomConfiguration,
    Profile(usize),
}

/// Resolve the launch request against the catalog, prompting on `input`/`output` when
/// no profile id was given on the command line.
pub fn resolve_profile<R, W>(
    request: &LaunchRequest,
    catalog: &ProfileCatalog,
    game: &GameSettings,
    input: &mut R,
    output: &mut W,
) -> Result<Resolution, LaunchError>
where
    R: BufRead,
    W: Write,
{
    if !is_fish_count_valid(request.fish_count, game.keepnet_limit) {
        warn!(
            target: "rf4_launcher::resolver",
            fish_count = request.fish_count,
            keepnet_limit = game.keepnet_limit,
            "Rejected fish count"
        );
        return Err(InvalidArgument::FishCountOutOfRange {
            count: request.fish_count,
            keepnet_limit: game.keepnet_limit,
        }
        .into());
    }
    // Validated above: 0 <= fish_count < keepnet_limit <= u32::MAX.
    let fish_count = u32::try_from(request.fish_count).unwrap_or_default();

    let choice = match request.pid {
        Some(pid) => choice_from_cli(pid, catalog)?,
        None => prompt_for_choice(catalog, input, output)?,
    };

    let resolution = match choice {
        Choice::Quit => Resolution::Cancelled,
        Choice::CustomConfiguration => Resolution::Unavailable,
        Choice::Profile(index) => Resolution::Continue(build_profile(
            catalog,
            index,
            request.keep_strategy,
            fish_count,
        )?),
    };

    info!(
        target: "rf4_launcher::resolver",
        choice = ?choice,
        keep_strategy = request.keep_strategy.as_str(),
        fish_count,
        "Resolved profile selection"
    );
    Ok(resolution)
}

fn choice_from_cli(pid: i64, catalog: &ProfileCatalog) -> Result<Choice, InvalidArgument> {
    let id = pid.to_string();
    parse_choice(&id, catalog.len()).ok_or_else(|| {
        warn!(
            target: "rf4_launcher::resolver",
            pid,
            catalog_size = catalog.len(),
            "Rejected profile id from command line"
        );
        InvalidArgument::ProfileIdOutOfRange {
            id,
            catalog_size: catalog.len(),
        }
    })
}

/// List the catalog and ask until a valid id is entered. No retry limit.
fn prompt_for_choice<R, W>(
    catalog: &ProfileCatalog,
    input: &mut R,
    output: &mut W,
) -> Result<Choice, LaunchError>
where
    R: BufRead,
    W: Write,
{
    console::write_welcome(output)?;
    console::write_catalog(output, catalog)?;

    let mut prompt = console::ENTER_PROFILE_ID;
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(LaunchError::InputClosed);
        }

        let id = line.trim();
        if let Some(choice) = parse_choice(id, catalog.len()) {
            return Ok(choice);
        }

        debug!(
            target: "rf4_launcher::resolver",
            input = %id,
            catalog_size = catalog.len(),
            "Rejected interactive profile id"
        );
        prompt = console::RETRY_PROFILE_ID;
    }
}

fn parse_choice(id: &str, catalog_size: usize) -> Option<Choice> {
    if !is_profile_id_valid(id, catalog_size) {
        return None;
    }
    if id == QUIT_SENTINEL {
        return Some(Choice::Quit);
    }
    match id.parse::<usize>().ok()? {
        0 => Some(Choice::CustomConfiguration),
        index => Some(Choice::Profile(index)),
    }
}
