//! Command-line interface implementation for skaf.
//! Provides argument parsing and help text formatting using clap.

use crate::config::ScaffoldConfig;
use crate::constants::{
    DEFAULT_TEMPLATE, DEFAULT_TEMPLATER, DEFAULT_TEMPLATE_DIR, TEMPLATER_ENV, TEMPLATE_DIR_ENV,
};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for skaf.
#[derive(Parser, Debug)]
#[command(author, version, about = "skaf: scaffold new projects from reusable templates", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project from a template
    Init(InitArgs),
    /// List the templates available in the template library
    List(LibraryArgs),
}

/// Location of the template library, shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct LibraryArgs {
    /// Directory holding one subdirectory per template
    #[arg(long, value_name = "DIR", env = TEMPLATE_DIR_ENV, default_value = DEFAULT_TEMPLATE_DIR)]
    pub template_dir: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Name of the project to create
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Name of the template to use
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write into an existing, non-empty project directory
    #[arg(short, long)]
    pub force: bool,

    /// Ask for every variable, pre-filling declared defaults
    #[arg(long)]
    pub prompt_defaults: bool,

    /// Templater used when the template does not declare one
    #[arg(long, value_name = "NAME", env = TEMPLATER_ENV, default_value = DEFAULT_TEMPLATER)]
    pub templater: String,

    #[command(flatten)]
    pub library: LibraryArgs,
}

impl InitArgs {
    /// Builds the engine configuration from the parsed arguments.
    pub fn config(&self) -> ScaffoldConfig {
        ScaffoldConfig {
            template_dir: self.library.template_dir.clone(),
            default_templater: self.templater.clone(),
            auto_use_defaults: self.prompt_defaults.then_some(false),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                || e.kind() == ErrorKind::MissingSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
