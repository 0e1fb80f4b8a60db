// Sun Feb 22 2026 - Alex

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid compile_commands.json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of a `compile_commands.json` file. Only the fields the loader
/// needs; the command line itself is the front end's business.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileCommand {
    pub directory: String,
    pub file: String,
    #[serde(default)]
    pub output: String,
}

/// A JSON compilation database, used to map source files to the AST
/// snapshots the front end exported next to its object files.
#[derive(Debug)]
pub struct CompilationDatabase {
    root: PathBuf,
    commands: Vec<CompileCommand>,
}

impl CompilationDatabase {
    pub fn load_from_directory(build_dir: &Path) -> Result<Self, DatabaseError> {
        let path = build_dir.join("compile_commands.json");
        let text = fs::read_to_string(&path).map_err(|source| DatabaseError::Read {
            path: path.clone(),
            source,
        })?;
        let commands: Vec<CompileCommand> = serde_json::from_str(&text)?;

        log::info!(
            "loaded compilation database with {} entries from {}",
            commands.len(),
            path.display()
        );

        Ok(Self {
            root: build_dir.to_path_buf(),
            commands,
        })
    }

    /// The snapshot path for a source file: the recorded output with an
    /// `.ast.json` extension if the database knows the file, otherwise the
    /// source path itself with `.ast.json` appended, rooted in the build
    /// directory.
    pub fn snapshot_path(&self, source: &Path) -> PathBuf {
        for command in &self.commands {
            if Path::new(&command.file) == source && !command.output.is_empty() {
                return self.root.join(Path::new(&command.output).with_extension("ast.json"));
            }
        }
        self.root.join(source.with_extension("ast.json"))
    }
}
