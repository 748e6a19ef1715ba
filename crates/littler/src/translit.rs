//! ASCII transliteration for station names.

/// Substitution table for the diacritics that occur in Austrian station
/// names. Deliberately explicit rather than locale-dependent
/// normalization, so the output is stable across platforms.
const TABLE: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
];

/// Replaces German umlauts and sharp s with their ASCII digraphs.
///
/// Characters outside the table pass through unchanged.
pub fn transliterate(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match TABLE.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
