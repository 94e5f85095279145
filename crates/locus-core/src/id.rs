//! Identifier generation for location records.

/// Generates a fresh, globally unique location identifier.
///
/// Identifiers are immutable after creation; callers never supply one on
/// the create path.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_non_empty_and_unique() {
        let a = generate_id();
        let b = generate_id();
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_ne!(a, b);
    }
}
