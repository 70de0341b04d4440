use prodsched_grid::CellValue;

/// Tolerant integer coercion for quantity cells.
///
/// Blank or unparseable values become 0 rather than an error; comma
/// separators are stripped; fractional values truncate toward zero.
pub fn safe_int(value: &CellValue) -> i64 {
    match value {
        CellValue::Empty | CellValue::Date(_) => 0,
        CellValue::Number(n) => n.trunc() as i64,
        CellValue::Text(s) => {
            let s = s.trim().replace(',', "");
            if s.is_empty() {
                return 0;
            }
            s.parse::<f64>().map(|f| f.trunc() as i64).unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separators_stripped() {
        assert_eq!(safe_int(&CellValue::Text("1,234".into())), 1234);
        assert_eq!(safe_int(&CellValue::Text("1,234,567".into())), 1_234_567);
    }

    #[test]
    fn blank_and_unparseable_are_zero() {
        assert_eq!(safe_int(&CellValue::Text("".into())), 0);
        assert_eq!(safe_int(&CellValue::Text("  ".into())), 0);
        assert_eq!(safe_int(&CellValue::Text("n/a".into())), 0);
        assert_eq!(safe_int(&CellValue::Empty), 0);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(safe_int(&CellValue::Text("12.9".into())), 12);
        assert_eq!(safe_int(&CellValue::Text("-12.9".into())), -12);
        assert_eq!(safe_int(&CellValue::Number(3.7)), 3);
        assert_eq!(safe_int(&CellValue::Number(-3.7)), -3);
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(safe_int(&CellValue::Number(10.0)), 10);
        assert_eq!(safe_int(&CellValue::Text("10".into())), 10);
    }
}
