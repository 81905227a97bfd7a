//! Input validation for book data.

use crate::error::{FolioError, Result};

/// Maximum allowed length for a book title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validates a book title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(FolioError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(FolioError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_titles() {
        assert!(validate_title("The Hobbit").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_titles() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn rejects_overlong_titles() {
        let long = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_title(&long).is_err());
    }
}
