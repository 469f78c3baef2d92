//! Roman numeral rendering for major arcana labels.

const TABLE: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a standard subtractive representation.
pub const MAX_ROMAN: u16 = 3999;

/// Renders `n` in subtractive Roman notation.
///
/// Zero has no Roman form and renders as `"0"` (The Fool); values above
/// [`MAX_ROMAN`] fall back to decimal.
///
/// ```
/// use arcana_engine::numerals::to_roman;
/// assert_eq!(to_roman(0), "0");
/// assert_eq!(to_roman(14), "XIV");
/// assert_eq!(to_roman(21), "XXI");
/// ```
pub fn to_roman(n: u16) -> String {
    if n == 0 || n > MAX_ROMAN {
        return n.to_string();
    }
    let mut rest = n;
    let mut out = String::new();
    for &(value, symbol) in TABLE.iter() {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    out
}

/// Parses a canonical Roman numeral. Non-canonical spellings such as
/// `"IIII"` or `"VX"` are rejected.
pub fn from_roman(s: &str) -> Option<u16> {
    if s == "0" {
        return Some(0);
    }
    if s.is_empty() {
        return None;
    }
    let upper = s.to_ascii_uppercase();
    let mut rest = upper.as_str();
    let mut total: u16 = 0;
    for &(value, symbol) in TABLE.iter() {
        while let Some(stripped) = rest.strip_prefix(symbol) {
            total = total.checked_add(value)?;
            rest = stripped;
        }
    }
    if !rest.is_empty() || total > MAX_ROMAN {
        return None;
    }
    // greedy parsing accepts e.g. "IIII"; only the canonical spelling round-trips
    (to_roman(total) == upper).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_major_arcana_range() {
        let expected = [
            "0", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII",
            "XIV", "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
        ];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(to_roman(n as u16), *want);
        }
    }

    #[test]
    fn renders_large_values() {
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(3999), "MMMCMXCIX");
        assert_eq!(to_roman(4000), "4000");
    }

    #[test]
    fn parses_canonical_forms_only() {
        assert_eq!(from_roman("XVI"), Some(16));
        assert_eq!(from_roman("xix"), Some(19));
        assert_eq!(from_roman("0"), Some(0));
        assert_eq!(from_roman("IIII"), None);
        assert_eq!(from_roman("VX"), None);
        assert_eq!(from_roman("ABC"), None);
        assert_eq!(from_roman(""), None);
    }
}
