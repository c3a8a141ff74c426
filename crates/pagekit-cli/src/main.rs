use clap::Parser;
use pagekit::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Broken pipes (`pagekit toc page.md | head`) end the process quietly
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
