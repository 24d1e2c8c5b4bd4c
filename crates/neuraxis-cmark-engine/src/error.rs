/// Failures of the byte-level entry point. Markdown itself never fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is not valid UTF-8: invalid sequence at byte {valid_up_to}")]
    InvalidEncoding {
        /// Length of the valid prefix.
        valid_up_to: usize,
        /// Length of the invalid sequence, `None` if the input ends mid-character.
        error_len: Option<usize>,
    },
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(e: std::str::Utf8Error) -> Self {
        ParseError::InvalidEncoding {
            valid_up_to: e.valid_up_to(),
            error_len: e.error_len(),
        }
    }
}
