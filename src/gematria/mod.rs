//! Conversion between Hebrew gematria numerals and integers.
//!
//! Chapter and verse numbers are rendered as Hebrew letters (א, ב, ...,
//! קיט) and read back from free text. 15 and 16 are always spelled טו and
//! טז; the letter pairs יה and יו are never produced.

/// Letter values in descending order. The greedy decomposition in
/// [`to_numeral`] relies on this ordering.
const VALUES: &[(i64, char)] = &[
    (400, 'ת'),
    (300, 'ש'),
    (200, 'ר'),
    (100, 'ק'),
    (90, 'צ'),
    (80, 'פ'),
    (70, 'ע'),
    (60, 'ס'),
    (50, 'נ'),
    (40, 'מ'),
    (30, 'ל'),
    (20, 'כ'),
    (10, 'י'),
    (9, 'ט'),
    (8, 'ח'),
    (7, 'ז'),
    (6, 'ו'),
    (5, 'ה'),
    (4, 'ד'),
    (3, 'ג'),
    (2, 'ב'),
    (1, 'א'),
];

const FIFTEEN: &str = "טו";
const SIXTEEN: &str = "טז";

/// Render a positive integer as a Hebrew numeral.
///
/// Returns an empty string for `n <= 0`; callers treat empty as
/// "no numeral". A remainder of exactly 15 or 16 at any point in the
/// decomposition short-circuits to טו/טז, so 115 renders as קטו and
/// never as קיה.
pub fn to_numeral(n: i64) -> String {
    if n <= 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut rest = n;
    while rest > 0 {
        if rest == 15 {
            out.push_str(FIFTEEN);
            break;
        }
        if rest == 16 {
            out.push_str(SIXTEEN);
            break;
        }

        // VALUES descends, so the first entry not exceeding the
        // remainder is the largest one.
        let (value, letter) = VALUES
            .iter()
            .find(|(value, _)| *value <= rest)
            .copied()
            .unwrap_or((1, 'א'));
        out.push(letter);
        rest -= value;
    }

    out
}

/// Read a Hebrew numeral (or a plain base-10 number) back to an integer.
///
/// Quote characters and the Hebrew abbreviation marks geresh/gershayim
/// are stripped first, so קי״ט reads as 119. Unknown characters
/// contribute 0, and empty or unparseable input yields 0 rather than an
/// error.
pub fn from_numeral(s: &str) -> i64 {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '\u{05F3}' | '\u{05F4}'))
        .collect();

    if cleaned.is_empty() {
        return 0;
    }
    if cleaned == FIFTEEN {
        return 15;
    }
    if cleaned == SIXTEEN {
        return 16;
    }
    if let Ok(n) = cleaned.parse::<i64>() {
        return n;
    }

    cleaned.chars().map(letter_value).sum()
}

fn letter_value(c: char) -> i64 {
    match c {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for n in 1..=400 {
            let numeral = to_numeral(n);
            assert_eq!(
                from_numeral(&numeral),
                n,
                "round trip failed for {n} (rendered as {numeral})"
            );
        }
    }

    #[test]
    fn test_divine_name_spellings() {
        assert_eq!(to_numeral(15), "טו");
        assert_eq!(to_numeral(16), "טז");
        assert_eq!(to_numeral(115), "קטו");
        assert_eq!(to_numeral(316), "שטז");

        for n in 1..=400 {
            let numeral = to_numeral(n);
            assert!(
                !numeral.contains("יה") && !numeral.contains("יו"),
                "{n} rendered as {numeral}"
            );
        }
    }

    #[test]
    fn test_from_numeral_specials() {
        assert_eq!(from_numeral("טו"), 15);
        assert_eq!(from_numeral("טז"), 16);
    }

    #[test]
    fn test_from_numeral_strips_abbreviation_marks() {
        assert_eq!(from_numeral("קי\u{05F4}ט"), 119);
        assert_eq!(from_numeral("צ\u{05F3}"), 90);
        assert_eq!(from_numeral("קי\"ט"), 119);
        assert_eq!(from_numeral("א'"), 1);
    }

    #[test]
    fn test_from_numeral_numeric_passthrough() {
        assert_eq!(from_numeral("5"), 5);
        assert_eq!(from_numeral("119"), 119);
    }

    #[test]
    fn test_from_numeral_safe_defaults() {
        assert_eq!(from_numeral(""), 0);
        assert_eq!(from_numeral("''"), 0);
        assert_eq!(from_numeral("abc"), 0);
    }

    #[test]
    fn test_final_forms() {
        assert_eq!(from_numeral("ם"), 40);
        assert_eq!(from_numeral("ץ"), 90);
        assert_eq!(from_numeral("ןב"), 52);
    }

    #[test]
    fn test_to_numeral_non_positive() {
        assert_eq!(to_numeral(0), "");
        assert_eq!(to_numeral(-3), "");
    }

    #[test]
    fn test_to_numeral_above_table() {
        // Multi-hundred values repeat ת as needed.
        assert_eq!(to_numeral(500), "תק");
        assert_eq!(to_numeral(815), "תתטו");
    }
}
