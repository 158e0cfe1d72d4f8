//! skaf's main application entry point.
//! Handles command-line argument parsing and hands off to the scaffold engine.

use skaf::{
    cli::{get_args, Command, InitArgs, LibraryArgs},
    error::{default_error_handler, Result},
    loader::{FilesystemRegistry, TemplateRegistry},
    logger::init_logger,
    processor::{ScaffoldRequest, Scaffolder},
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let result = match args.command {
        Command::Init(init) => run_init(init),
        Command::List(library) => run_list(library),
    };
    if let Err(err) = result {
        default_error_handler(err);
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config = args.config();
    let registry = FilesystemRegistry::new(&config.template_dir);
    let prompter = DialoguerPrompter::new();
    log::debug!("Using templates from the {}", registry.source());

    let request = ScaffoldRequest::new(&args.name, &args.template, &args.output_dir)
        .force(args.force);
    let report = Scaffolder::new(&registry, &prompter, &config).scaffold(&request)?;

    for file in &report.files {
        println!("Created: '{}'", file.display());
    }
    println!(
        "Project '{}' initialized successfully using the '{}' template in {}.",
        args.name,
        args.template,
        report.project_path.display()
    );
    Ok(())
}

fn run_list(args: LibraryArgs) -> Result<()> {
    let registry = FilesystemRegistry::new(&args.template_dir);
    for name in registry.list()? {
        println!("{name}");
    }
    Ok(())
}
