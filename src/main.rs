//! `booklib` 바이너리 진입점.

use booklib::interface::cli::{AppComposition, Cli, CliAction, run_batch, run_repl};

fn main() {
    let request = match Cli::parse_request() {
        Ok(request) => request,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let default_filter = if request.verbose {
        "booklib=debug,warn"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let composition = match AppComposition::load() {
        Ok(composition) => composition,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let result = match request.action {
        CliAction::InspectConfig => composition
            .inspect_config_usecase()
            .execute()
            .map(|json| println!("{json}")),
        CliAction::Interactive { files } => composition
            .open_library(&files)
            .and_then(|mut data| run_repl(&composition, &mut data)),
        CliAction::Batch { files, lines } => composition
            .open_library(&files)
            .and_then(|mut data| run_batch(&composition, &mut data, &lines)),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
