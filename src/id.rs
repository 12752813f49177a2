use nanoid::nanoid;

/// Alphabet for document identifiers (ambiguous glyphs removed).
const ID_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
    'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
/// Length of generated document identifiers.
const ID_LENGTH: usize = 20;

/// Generates a new collision-resistant document identifier.
///
/// Unique per collection by construction; no wall-clock component.
pub fn generate_id() -> String {
    nanoid!(ID_LENGTH, ID_ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_expected_length_and_charset() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| ID_ALPHABET.contains(&c)));
    }

    #[test]
    fn ids_do_not_repeat() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_id()));
        }
    }
}
