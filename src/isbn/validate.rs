/// The two ISBN forms accepted by [`validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

impl std::fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IsbnKind::Isbn10 => f.write_str("ISBN-10"),
            IsbnKind::Isbn13 => f.write_str("ISBN-13"),
        }
    }
}

/// Check an ISBN-10 or ISBN-13, returning its form when the checksum holds.
///
/// Hyphens and spaces are removed first; any other separator makes the
/// input invalid. The form is chosen by the remaining length in bytes.
pub fn check(identifier: &str) -> Option<IsbnKind> {
    let cleaned: Vec<u8> = identifier
        .bytes()
        .filter(|b| *b != b'-' && *b != b' ')
        .collect();

    match cleaned.len() {
        10 if isbn10_checksum_ok(&cleaned) => Some(IsbnKind::Isbn10),
        13 if isbn13_checksum_ok(&cleaned) => Some(IsbnKind::Isbn13),
        _ => None,
    }
}

/// Whether `identifier` is a valid ISBN-10 or ISBN-13
pub fn validate(identifier: &str) -> bool {
    check(identifier).is_some()
}

fn digit(b: u8) -> Option<u32> {
    b.is_ascii_digit().then(|| u32::from(b - b'0'))
}

/// Weights 10 down to 1; the check position also accepts `X` for 10.
fn isbn10_checksum_ok(isbn: &[u8]) -> bool {
    let mut sum = 0;
    for (i, &b) in isbn[..9].iter().enumerate() {
        let Some(d) = digit(b) else {
            return false;
        };
        sum += d * (10 - i as u32);
    }

    let check = match isbn[9] {
        b'X' | b'x' => 10,
        b => match digit(b) {
            Some(d) => d,
            None => return false,
        },
    };

    (sum + check) % 11 == 0
}

/// Weights alternate 1, 3 starting from the first digit; no `X` allowed.
fn isbn13_checksum_ok(isbn: &[u8]) -> bool {
    let mut sum = 0;
    for (i, &b) in isbn.iter().enumerate() {
        let Some(d) = digit(b) else {
            return false;
        };
        sum += if i % 2 == 0 { d } else { d * 3 };
    }
    sum % 10 == 0
}
