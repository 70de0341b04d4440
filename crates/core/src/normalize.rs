use prodsched_grid::CellValue;

/// Canonicalize a free-text key for comparison.
///
/// Trims surrounding whitespace and folds the hyphen look-alikes that
/// show up in hand-entered keys — full-width hyphen-minus (U+FF0D),
/// katakana prolonged sound mark (U+30FC) and minus sign (U+2212) —
/// into the ASCII hyphen. No casing changes. Idempotent.
pub fn normalize_key(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '\u{FF0D}' | '\u{30FC}' | '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Normalize a cell's textual rendering. Empty cells normalize to "".
pub fn normalize_cell(value: &CellValue) -> String {
    normalize_key(&value.as_text())
}
