// Sun Feb 22 2026 - Alex

pub mod database;
pub mod snapshot;

use std::path::{Path, PathBuf};

pub use database::{CompilationDatabase, CompileCommand, DatabaseError};
pub use snapshot::SnapshotLoader;

use crate::ast::TranslationUnit;
use crate::config::ParseConfig;
use crate::model::ParseResult;
use crate::parse::ParseContext;

/// The compilation front end boundary: runs over all inputs and hands each
/// parsed translation unit to the visitor. Returns the front end's exit
/// status (0 for success).
pub trait TuProvider {
    fn run(&mut self, visit: &mut dyn FnMut(&TranslationUnit)) -> i32;
}

/// Runs the engine over every translation unit the provider produces.
/// A failing provider prefixes the result error but keeps whatever was
/// gathered before the failure.
pub fn parse_records(provider: &mut dyn TuProvider, config: &ParseConfig) -> ParseResult {
    let mut context = ParseContext::new(config);
    let status = provider.run(&mut |unit| context.process_unit(unit));

    let mut result = context.into_result();
    if status != 0 {
        result.add_error_context("failed to run tool");
    }
    result
}

/// Like [`parse_records`], but resolves the sources through a compilation
/// database in `build_dir` first.
pub fn parse_records_in_directory(
    build_dir: &Path,
    sources: &[PathBuf],
    config: &ParseConfig,
) -> ParseResult {
    let database = match CompilationDatabase::load_from_directory(build_dir) {
        Ok(database) => database,
        Err(err) => {
            return ParseResult::fail(format!("failed to create compilation database: {}", err));
        }
    };

    let paths = sources
        .iter()
        .map(|source| database.snapshot_path(source))
        .collect();
    let mut loader = SnapshotLoader::new(paths);
    parse_records(&mut loader, config)
}
