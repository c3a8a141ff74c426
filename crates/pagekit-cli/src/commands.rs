use super::args::{Cli, Commands, ConfigCommand, LogLevel};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use is_terminal::IsTerminal;
use pagekit_runtime::{Config, resolve_data_dir};
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);
    let config = Config::load_from(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let ctx = HandlerContext::new(data_dir, config, cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Events {
            endpoint,
            lang,
            view_mode,
        } => handlers::events::handle(&ctx, endpoint, lang, &view_mode),

        Commands::Toc {
            file,
            max_depth,
            fragment,
            lang,
            view_mode,
        } => handlers::toc::handle(&ctx, &file, max_depth, fragment, lang, &view_mode),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
        },
    }
}

/// Diagnostics go to stderr so stdout stays clean for `--format json`
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
