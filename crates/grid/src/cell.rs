use chrono::NaiveDate;
use serde::Serialize;

/// Date format used for textual date cells throughout the system.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl CellValue {
    /// Parse raw textual input into a typed cell.
    ///
    /// Numbers win over dates; `2026/08/26` is not a valid f64 so the
    /// ordering is unambiguous. Anything else stays text.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if let Ok(num) = trimmed.parse::<f64>() {
            return CellValue::Number(num);
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return CellValue::Date(date);
        }

        CellValue::Text(trimmed.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Textual rendering of the cell, empty string for `Empty`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            CellValue::Date(d) => d.format(DATE_FORMAT).to_string(),
        }
    }

    /// Interpret the cell as a date: native date cells directly,
    /// text cells via `YYYY/MM/DD`. Everything else is `None`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            CellValue::Text(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
            _ => None,
        }
    }

    /// Canonical hashable form of the raw cell, used when raw cell
    /// tuples act as identity keys. `Number(1.0)` and `Text("1")`
    /// stay distinct.
    pub fn key(&self) -> CellKey {
        match self {
            CellValue::Empty => CellKey::Empty,
            CellValue::Number(n) => CellKey::Number(n.to_bits()),
            CellValue::Text(s) => CellKey::Text(s.clone()),
            CellValue::Date(d) => CellKey::Date(*d),
        }
    }
}

/// Hashable canonical form of a `CellValue`. Numbers are carried as
/// their IEEE bit pattern so the key derives `Eq` + `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKey {
    Empty,
    Number(u64),
    Text(String),
    Date(NaiveDate),
}
