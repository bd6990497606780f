use crate::demo::{run_demo, run_validate, ValidateArgs};
use crate::server;
use application_form::error::AppError;
use clap::{Args, Parser, Subcommand};

/// Exit status for a form that was read successfully but failed validation.
const EXIT_INVALID_FORM: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "Job Application Form",
    about = "Serve, validate, or demo the job application form from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve a single form session over HTTP (default command)
    Serve(ServeArgs),
    /// Validate a form record stored as JSON and print the rendered form
    Validate(ValidateArgs),
    /// Walk through the reference applicant scenarios
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => {
            if run_validate(args)? {
                Ok(())
            } else {
                std::process::exit(EXIT_INVALID_FORM);
            }
        }
        Command::Demo => run_demo(),
    }
}
