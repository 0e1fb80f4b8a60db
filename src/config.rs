// Wed Feb 18 2026 - Alex

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Whether empty structs should be folded into any containing record
    /// (and dropped from the top level).
    pub inline_empty_structs: bool,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inline_empty_structs(mut self, inline: bool) -> Self {
        self.inline_empty_structs = inline;
        self
    }
}
