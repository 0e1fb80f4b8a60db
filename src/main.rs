// Mon Feb 23 2026 - Alex

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use classgen::{
    parse_records, parse_records_in_directory, JsonSerializer, ParseConfig, SnapshotLoader,
};
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(name = "classgen")]
#[command(version = "1.0.0")]
#[command(about = "Dump C++ record layouts and Itanium vtables as JSON", long_about = None)]
struct Args {
    /// AST snapshot files, one per translation unit.
    sources: Vec<PathBuf>,

    /// Build directory containing compile_commands.json.
    #[arg(short = 'p', long = "build-path")]
    build_path: Option<PathBuf>,

    /// Inline empty structs.
    #[arg(short = 'i')]
    inline_empty_structs: bool,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ParseConfig::new().with_inline_empty_structs(args.inline_empty_structs);

    let result = match &args.build_path {
        Some(build_dir) => parse_records_in_directory(build_dir, &args.sources, &config),
        None => {
            let mut loader = SnapshotLoader::new(args.sources.clone());
            parse_records(&mut loader, &config)
        }
    };

    if !result.is_ok() {
        eprintln!("{} {}", "[!]".red(), result.error);
    }

    let serializer = JsonSerializer::new().with_pretty_print(!args.compact);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serializer.serialize(&result))?;
    stdout.flush()?;

    // The result is emitted even on failure; only a broken tool invocation
    // turns into a non-zero exit.
    let tool_failed = result.error.starts_with("failed to run tool")
        || result.error.starts_with("failed to create compilation database");
    if tool_failed {
        std::process::exit(1);
    }

    Ok(())
}
