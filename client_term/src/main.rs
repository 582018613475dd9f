use anyhow::Result;
use clap::Parser;
use client_term::{app::App, cli::Cli, logging, renderer::RenderContext};
use game_core::{Config, Game};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init_logging(&cli.log_file, cli.debug);
    cli.log_startup();

    let game = Game::new(Config::new(), cli.player_one.clone(), cli.player_two.clone())?;

    let mut render_ctx = RenderContext::new("Pong")?;
    let mut app = App::new(game, render_ctx.reports_key_release());
    let result = app.run(&mut render_ctx);

    // Restore the terminal before reporting any error
    drop(render_ctx);
    info!("Game closed");
    result
}
