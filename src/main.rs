use forg::CategoryTable;
use forg::cli::{self, Config};
use forg::output::OutputFormatter;
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    // The file name the binary was invoked as, for self-exclusion.
    let program_name = args
        .first()
        .map(|arg| {
            Path::new(arg)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| arg.clone())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let config = Config::parse(args.get(1..).unwrap_or_default());

    if config.show_help {
        cli::print_help(&CategoryTable::new());
        return ExitCode::SUCCESS;
    }

    if config.show_version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let current_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            OutputFormatter::error(&format!("Cannot determine current directory: {}", e));
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&config, &current_dir, &program_name) {
        Ok(stats) if stats.errors > 0 => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
