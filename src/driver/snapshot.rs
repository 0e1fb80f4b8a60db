// Sun Feb 22 2026 - Alex

use std::fs;
use std::path::PathBuf;

use crate::ast::TranslationUnit;
use crate::driver::TuProvider;

/// A front end that replays AST snapshots exported as JSON, one translation
/// unit per file. Unreadable or malformed snapshots are reported like a
/// failed compiler invocation: the remaining files still run and the final
/// status is non-zero.
#[derive(Debug, Default)]
pub struct SnapshotLoader {
    paths: Vec<PathBuf>,
}

impl SnapshotLoader {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl TuProvider for SnapshotLoader {
    fn run(&mut self, visit: &mut dyn FnMut(&TranslationUnit)) -> i32 {
        let mut status = 0;

        for path in &self.paths {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    log::error!("cannot read {}: {}", path.display(), err);
                    status = 1;
                    continue;
                }
            };

            let unit: TranslationUnit = match serde_json::from_str(&text) {
                Ok(unit) => unit,
                Err(err) => {
                    log::error!("invalid AST snapshot {}: {}", path.display(), err);
                    status = 1;
                    continue;
                }
            };

            log::info!(
                "processing {} ({} declarations)",
                path.display(),
                unit.decls.len()
            );
            visit(&unit);
        }

        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstBuilder, RecordBuilder, TagKind};
    use crate::config::ParseConfig;
    use crate::driver::parse_records;

    #[test]
    fn test_missing_snapshot_fails_without_aborting() {
        let mut loader = SnapshotLoader::new(vec![PathBuf::from("/nonexistent/a.ast.json")]);
        let mut visited = 0;
        let status = loader.run(&mut |_| visited += 1);
        assert_eq!(status, 1);
        assert_eq!(visited, 0);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut b = AstBuilder::new();
        let int_ty = b.named_type("int");
        b.add_record(
            RecordBuilder::new("S", TagKind::Struct)
                .size(4)
                .data_size(4)
                .alignment(4)
                .field("x", crate::ast::QualType::unqualified(int_ty), 0),
        );
        let unit = b.finish();

        let path = std::env::temp_dir().join(format!(
            "classgen-snapshot-{}.ast.json",
            std::process::id()
        ));
        fs::write(&path, serde_json::to_string(&unit).unwrap()).unwrap();

        let mut loader = SnapshotLoader::new(vec![path.clone()]);
        let result = parse_records(&mut loader, &ParseConfig::default());
        fs::remove_file(&path).ok();

        assert!(result.is_ok());
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "S");
        assert_eq!(result.records[0].size, 4);
    }
}
