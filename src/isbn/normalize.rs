use super::classify::{URN_PREFIX, has_urn_prefix};

/// Reduce a raw identifier value to a compact ISBN candidate.
///
/// A leading `urn:isbn:` (any case) is dropped, then only ASCII digits and
/// `X`/`x` survive, the latter upper-cased. An `X` is kept only in the final
/// position, so the result is digits with at most one trailing `X`;
/// `12X4` becomes `124` rather than keeping the inner `X`.
///
/// Never fails: malformed input yields a short or empty string, and the
/// function is idempotent. Validity is checked separately by
/// [`validate`](super::validate).
pub fn normalize(raw: &str) -> String {
    let body = if has_urn_prefix(raw) {
        &raw[URN_PREFIX.len()..]
    } else {
        raw
    };

    let mut compact: String = body
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            'X' | 'x' => Some('X'),
            _ => None,
        })
        .collect();

    let trailing_x = compact.ends_with('X');
    compact.retain(|c| c != 'X');
    if trailing_x {
        compact.push('X');
    }
    compact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_urn() {
        assert_eq!(normalize("urn:isbn:978-5-4461-1766-6"), "9785446117666");
        assert_eq!(normalize("URN:ISBN:978-5-4461-1766-6"), "9785446117666");
        assert_eq!(normalize("Urn:Isbn:0-306-40615-2"), "0306406152");
    }

    #[test]
    fn test_normalize_separators_and_check_char() {
        assert_eq!(normalize("1-56881-111-x"), "156881111X");
        assert_eq!(normalize(" ISBN 978 0 306 40615 7 "), "9780306406157");
    }

    #[test]
    fn test_normalize_inner_x_dropped() {
        assert_eq!(normalize("12X4"), "124");
        assert_eq!(normalize("1xX"), "1X");
        assert_eq!(normalize("X"), "X");
    }

    #[test]
    fn test_normalize_degrades_gracefully() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("urn:isbn:"), "");
        assert_eq!(normalize("no digits here"), "");
        assert_eq!(normalize("١٢٣"), "");
    }
}
