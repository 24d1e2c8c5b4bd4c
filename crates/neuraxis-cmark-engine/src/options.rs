use serde::{Deserialize, Serialize};

/// Knobs for a parse. None of them change the resulting tree for valid UTF-8 input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Replace invalid UTF-8 with U+FFFD in `parse_bytes` instead of failing.
    pub lossy_utf8: bool,
    /// Run the inline phase on the rayon thread pool.
    pub parallel_inlines: bool,
}
