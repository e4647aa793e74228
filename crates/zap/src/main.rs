use crate::prelude::{eprintln, println, *};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::process::ExitCode;

mod about;
mod batch;
mod client;
mod config;
mod error;
mod history;
mod prelude;
mod shorten;
mod validate;

use crate::config::Config;

#[derive(Debug, clap::Parser)]
#[command(
    name = "zap",
    author,
    about = "URL Shortener CLI Tool (Powered by TinyURL)",
    after_help = zap_core::about::USE_CASES
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Shorten a URL
    #[clap(name = "shorten")]
    Shorten(crate::shorten::ShortenOptions),

    /// Validate a URL without shortening
    #[clap(name = "validate")]
    Validate(crate::validate::ValidateOptions),

    /// Display history of shortened URLs
    #[clap(name = "history")]
    History,

    /// Shorten multiple URLs from a file
    #[clap(name = "batch")]
    Batch(crate::batch::BatchOptions),

    /// Display information about the tool
    #[clap(name = "info")]
    Info,

    /// Display the tool version
    #[clap(name = "version")]
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let Some(command) = app.command else {
        App::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    exit_code(dispatch(command).await)
}

/// Map the outcome of a command to the process exit code
///
/// Known failures are printed and exit with 1. Any other report is handed
/// back to color-eyre, which also exits with 1.
fn exit_code(result: Result<()>) -> Result<ExitCode> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(report) => match report.downcast_ref::<Error>() {
            Some(err) => {
                report_error(err);
                Ok(ExitCode::FAILURE)
            }
            None => Err(report),
        },
    }
}

async fn dispatch(command: SubCommands) -> Result<()> {
    match command {
        SubCommands::Shorten(options) => crate::shorten::run(options, &Config::from_env()?).await,
        SubCommands::Validate(options) => crate::validate::run(options),
        SubCommands::History => crate::history::run(&Config::from_env()?),
        SubCommands::Batch(options) => crate::batch::run(options, &Config::from_env()?).await,
        SubCommands::Info => crate::about::info(),
        SubCommands::Version => crate::about::version(),
    }
}

fn report_error(err: &Error) {
    if err.is_verdict() {
        println!("{}", err.to_string().red());
    } else {
        eprintln!("{} {}", "Error:".red().bold(), err);
    }
}
