use clap::Parser;
use tod::cli::commands::Cli;
use tod::cli::handlers;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file
        && let Err(e) = tod::io::log::init_file_logging(path)
    {
        eprintln!("error: could not start logging to {}: {}", path.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli) {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
