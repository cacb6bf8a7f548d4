//! astgen compiler CLI.

use astgenc::{init_tracing, parse_args, run, CliError};

fn print_usage() {
    eprintln!("Usage: astgenc <rules.dsl> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --output=<dir>      Output directory (default: output)");
    eprintln!("  --package=<name>    Root package of generated classes");
    eprintln!("  --core=<name>       Package of the runtime library");
    eprintln!("  --license=<file>    File with the license header text");
    eprintln!("  --version=<text>    Version for @since tags");
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|options| run(&options));
    match result {
        Ok(count) => println!("{count} file(s) generated"),
        Err(CliError::Compile(error)) => {
            eprintln!("{}", error.to_diagnostic());
            std::process::exit(1);
        }
        Err(error @ CliError::NoParameters) => {
            eprintln!("error: {error}");
            print_usage();
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
