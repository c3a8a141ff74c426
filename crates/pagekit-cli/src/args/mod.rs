mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pagekit")]
#[command(
    about = "Render community-event panels and in-page heading indexes",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $PAGEKIT_PATH or the XDG data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(
        long,
        default_value = "warn",
        global = true,
        help = "Diagnostic log level (RUST_LOG takes precedence when set)"
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pagekit",
            "toc",
            "page.md",
            "--format",
            "json",
            "--data-dir",
            "/tmp/pk",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/pk"));
        assert!(matches!(cli.command, Some(Commands::Toc { .. })));
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::try_parse_from(["pagekit"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
