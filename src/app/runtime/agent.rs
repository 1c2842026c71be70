use std::io::Write;

use anyhow::{Context, Result};

use crate::profile::UserProfile;

/// Boundary to the external automation layer that plays the session.
pub trait SessionAgent {
    /// Take ownership of the resolved profile and start playing.
    fn start(&mut self, profile: UserProfile) -> Result<()>;
}

/// Hands the profile over as one JSON line, for an automation process reading the pipe.
pub struct JsonLineAgent<W> {
    writer: W,
}

impl<W: Write> JsonLineAgent<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SessionAgent for JsonLineAgent<W> {
    fn start(&mut self, profile: UserProfile) -> Result<()> {
        let line = serde_json::to_string(&profile).context("failed to serialize profile")?;
        writeln!(self.writer, "{line}").context("failed to hand profile to play session")?;
        self.writer
            .flush()
            .context("failed to hand profile to play session")
    }
}
