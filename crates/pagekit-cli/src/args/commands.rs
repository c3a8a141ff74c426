use super::common::ViewModeArgs;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the community events panel")]
    Events {
        #[arg(
            long,
            help = "Functions base URL, or a directory holding calendarEvents.json"
        )]
        endpoint: Option<String>,

        #[arg(long, help = "Display language (e.g. en, de)")]
        lang: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the in-page index of a markdown page")]
    Toc {
        #[arg(help = "Markdown file to index")]
        file: PathBuf,

        #[arg(long, help = "Deepest heading level to list (h2 = 1)")]
        max_depth: Option<u32>,

        #[arg(long, help = "Current URL fragment, e.g. #setup")]
        fragment: Option<String>,

        #[arg(long, help = "Display language (e.g. en, de)")]
        lang: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Inspect configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,
}
