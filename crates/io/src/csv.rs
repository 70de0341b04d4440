// CSV/TSV grid import and export

use std::io::Read;
use std::path::Path;

use prodsched_core::ScheduleError;
use prodsched_grid::Grid;

pub fn import(path: &Path) -> Result<Grid, ScheduleError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    Ok(import_from_string(&content, delimiter, sheet_name(path)))
}

pub fn export(path: &Path, grid: &Grid) -> Result<(), ScheduleError> {
    let mut writer = csv::Writer::from_path(path).map_err(io_err)?;
    for row in 1..=grid.max_row() {
        let record: Vec<String> = (1..=grid.max_col()).map(|col| grid.text(col, row)).collect();
        writer.write_record(&record).map_err(io_err)?;
    }
    writer.flush().map_err(|e| ScheduleError::Io(e.to_string()))?;
    Ok(())
}

pub fn import_from_string(content: &str, delimiter: u8, name: String) -> Grid {
    let mut grid = Grid::new(name);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    for (row_idx, record) in reader.records().enumerate() {
        let Ok(record) = record else { continue };
        for (col_idx, field) in record.iter().enumerate() {
            if field.trim().is_empty() {
                continue;
            }
            grid.set_input(col_idx as u32 + 1, row_idx as u32 + 1, field);
        }
    }

    grid
}

/// Detect the most likely field delimiter by checking consistency
/// across the first few lines. The candidate producing the most
/// consistent field count (>1 field) wins; comma is the fallback.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        // More lines agreeing with line 1, then more columns, wins.
        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252
/// exports from legacy spreadsheet tooling).
fn read_file_as_utf8(path: &Path) -> Result<String, ScheduleError> {
    let mut file = std::fs::File::open(path).map_err(|e| ScheduleError::Io(e.to_string()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ScheduleError::Io(e.to_string()))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet1")
        .to_string()
}

fn io_err(e: csv::Error) -> ScheduleError {
    ScheduleError::Io(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodsched_grid::CellValue;

    #[test]
    fn import_types_cells() {
        let grid = import_from_string(
            "A-100,$NEW,,10\n,,,\nB-2,old,x,2026/08/26\n",
            b',',
            "t".into(),
        );
        assert_eq!(grid.text(1, 1), "A-100");
        assert_eq!(*grid.get(4, 1), CellValue::Number(10.0));
        assert!(grid.is_blank(3, 1));
        assert!(grid.date(4, 3).is_some());
    }

    #[test]
    fn sniffs_semicolons_and_tabs() {
        assert_eq!(sniff_delimiter("a;b;c\nd;e;f\n"), b';');
        assert_eq!(sniff_delimiter("a\tb\tc\n"), b'\t');
        assert_eq!(sniff_delimiter("a,b\nc,d\n"), b',');
    }

    #[test]
    fn round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut grid = Grid::new("out");
        grid.set_input(1, 1, "key");
        grid.set_input(2, 2, "1,234"); // quoted on export
        grid.set_input(3, 2, "2026/08/26");
        export(&path, &grid).unwrap();

        let loaded = import(&path).unwrap();
        assert_eq!(loaded.text(1, 1), "key");
        assert_eq!(loaded.text(2, 2), "1,234");
        assert_eq!(
            loaded.date(3, 2),
            chrono::NaiveDate::from_ymd_opt(2026, 8, 26)
        );
    }
}
