// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

/// Control summary printed at startup and under `--help`
pub const CONTROLS_HELP: &str = "Controls: WASD/QE move, hold LMB and drag to look, Shift boost, \
Home reset, Escape to quit. Gamepad: left stick move, right stick look, triggers down/up, \
stick click boost";

#[derive(Parser, Debug, Clone)]
#[command(name = "freelook")]
#[command(about = "Free-look camera controller demo", long_about = None)]
#[command(after_help = CONTROLS_HELP)]
pub struct Cli {
    /// JSON file with controller tuning; defaults are used when omitted
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Push the mouse/stick forward to look up
    #[arg(long = "no-invert-y", default_value = "false")]
    pub no_invert_y: bool,

    /// Seconds between pose/FPS log lines
    #[arg(long = "log-interval", default_value_t = 1.0)]
    pub log_interval: f32,
}
