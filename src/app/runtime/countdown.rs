use std::{
    io::{self, Write},
    time::Duration,
};

/// Seconds counted down before the play session starts.
pub const COUNTDOWN_SECS: u64 = 5;

const HINT: &str = "Hint: Edit 'enable_count_down' option in config.ini to disable the count down";

/// Count down on a single line, calling `sleep` once per second.
pub fn run_countdown(
    out: &mut impl Write,
    secs: u64,
    sleep: &mut impl FnMut(Duration),
) -> io::Result<()> {
    writeln!(out, "{HINT}")?;
    for remaining in (1..=secs).rev() {
        write!(out, "The script will start in: {remaining} seconds\r")?;
        out.flush()?;
        sleep(Duration::from_secs(1));
    }
    writeln!(out)
}
