//! Name handling shared by branches and customers.

use crate::error::{BankError, EntityKind, Result};

/// Lower-cases a name one character at a time.
///
/// Every case-insensitive comparison and every derived key goes through
/// this fold, so two names match exactly when their folds are equal.
pub fn fold_case(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// Returns true when both names are equal ignoring letter case.
pub fn names_match(a: &str, b: &str) -> bool {
    fold_case(a).eq(fold_case(b))
}

/// Rejects blank names, returning the name unchanged otherwise.
pub fn validate(kind: EntityKind, name: &str) -> Result<String> {
    if name.trim().is_empty() {
        Err(BankError::InvalidName(kind))
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("North", "north"));
        assert!(names_match("CENTRAL", "Central"));
        assert!(names_match("Ünion", "ünion"));
        assert!(!names_match("North", "Northern"));
        assert!(!names_match("North", "South"));
    }

    #[test]
    fn test_fold_case_is_per_character() {
        // A word-final capital sigma folds to the medial form, not to 'ς'.
        assert_eq!(fold_case("ΟΔΟΣ").collect::<String>(), "οδοσ");
        assert!(names_match("ΟΔΟΣ", "οδοσ"));
        assert!(!names_match("ΟΔΟΣ", "οδος"));
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert_eq!(validate(EntityKind::Branch, "Central").unwrap(), "Central");
        assert!(matches!(
            validate(EntityKind::Customer, ""),
            Err(BankError::InvalidName(EntityKind::Customer))
        ));
        assert!(matches!(
            validate(EntityKind::Branch, "   "),
            Err(BankError::InvalidName(EntityKind::Branch))
        ));
    }
}
