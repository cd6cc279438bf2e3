//! Title extraction.

use crate::error::Error;
use crate::lexer::Lexer;

const TITLE_PREFIX: &str = "# ";

/// Return the text of the first level-1 heading, trimmed.
///
/// Only the `# ` prefix shape is checked; the block classifier is not
/// consulted.
///
/// ```rust
/// use staticmark_core::extract_title;
///
/// assert_eq!(extract_title("Intro\n\n#  Hello  ").unwrap(), "Hello");
/// assert!(extract_title("## Not a title").is_err());
/// ```
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    Lexer::new(markdown)
        .find_map(|block| block.text.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}
