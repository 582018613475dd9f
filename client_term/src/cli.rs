use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "pong")]
#[command(about = "Classic two-player Pong in the terminal")]
#[command(after_help = "Left paddle: W/S. Right paddle: Up/Down. Quit: Esc or q.")]
#[command(version)]
pub struct Cli {
    /// Run in debug mode (verbose log output)
    #[arg(short, long)]
    pub debug: bool,

    /// Name of the player on the left paddle
    #[arg(long, default_value = "Player 1")]
    pub player_one: String,

    /// Name of the player on the right paddle
    #[arg(long, default_value = "Player 2")]
    pub player_two: String,

    /// File the game log is written to
    #[arg(long, default_value = "pong.log")]
    pub log_file: PathBuf,

    /// Anything else on the command line is accepted and logged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub unhandled: Vec<String>,
}

impl Cli {
    /// Log what the command line asked for. Call once logging is up.
    pub fn log_startup(&self) {
        if self.debug {
            debug!("Received \"--debug\" flag, running in debug mode");
        }
        for arg in &self.unhandled {
            info!(%arg, "Unhandled argument");
        }
    }
}
