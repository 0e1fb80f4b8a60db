// Wed Feb 18 2026 - Alex

use crate::model::{Enum, Record};

/// Everything extracted from one engine run. Enums and records appear in
/// traversal order; `error` is empty on success. Partial results gathered
/// before an error are kept.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub error: String,
    pub enums: Vec<Enum>,
    pub records: Vec<Record>,
}

impl ParseResult {
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Self::default()
        }
    }

    /// Prepends `context` to the current error message, colon-separated.
    pub fn add_error_context(&mut self, context: &str) {
        if self.error.is_empty() {
            self.error = context.to_string();
        } else {
            self.error = format!("{}: {}", context, self.error);
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_prefixing() {
        let mut result = ParseResult::fail("permission denied");
        result.add_error_context("failed to run tool");
        assert_eq!(result.error, "failed to run tool: permission denied");
        assert!(!result.is_ok());
    }

    #[test]
    fn test_error_context_on_empty() {
        let mut result = ParseResult::default();
        result.add_error_context("failed to run tool");
        assert_eq!(result.error, "failed to run tool");
    }
}
