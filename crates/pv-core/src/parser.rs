//! Delimited-table parser for pipeline result files

use crate::error::{Error, Result};
use crate::table::{CellValue, Column, Row, Table};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Marker that starts a comment line in gene-set tables
pub const COMMENT_MARKER: char = '#';

/// Pick the field delimiter from the file extension: tab for `.tsv`/`.tab`,
/// comma otherwise.
pub fn delimiter_for<P: AsRef<Path>>(path: P) -> u8 {
    match path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

/// Parse a table, choosing the delimiter from its extension
pub fn parse_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    parse_delimited(path, delimiter_for(path))
}

/// Parse a delimited file into a Table
pub fn parse_delimited<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table = read_table(BufReader::new(file), delimiter, path.to_path_buf())?;
    log::debug!(
        "parsed {} ({} columns, {} rows)",
        path.display(),
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

/// Parse delimited text from a string (useful for testing)
pub fn parse_delimited_str(content: &str, delimiter: u8, source_name: &str) -> Result<Table> {
    read_table(content.as_bytes(), delimiter, PathBuf::from(source_name))
}

fn read_table<R: Read>(reader: R, delimiter: u8, path: PathBuf) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true) // Allow varying number of fields
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| Error::Csv {
        path: path.clone(),
        source: e,
    })?;

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.trim().to_string(), i))
        .collect();

    if columns.is_empty() {
        return Err(Error::CsvParse {
            path,
            message: "no columns found in table".to_string(),
        });
    }

    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?;

        let mut cells: Vec<CellValue> = record.iter().map(CellValue::parse).collect();

        // Pad with empty cells if row is shorter than header
        while cells.len() < columns.len() {
            cells.push(CellValue::Empty);
        }

        if cells.len() > columns.len() {
            log::warn!(
                "row {} in {} has more cells than columns, truncating",
                row_idx + 1,
                path.display()
            );
            cells.truncate(columns.len());
        }

        rows.push(Row::new(cells));
    }

    Ok(Table {
        columns,
        rows,
        source_path: path,
    })
}

/// Count the lines of a file that do not start with [`COMMENT_MARKER`].
///
/// Every non-comment line counts, including a header line and blank lines.
pub fn count_data_lines<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count_data_lines_str(&content))
}

/// String form of [`count_data_lines`]
pub fn count_data_lines_str(content: &str) -> usize {
    content
        .lines()
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tsv() {
        let tsv = "Tissue\tNumber_of_TUSCO_Genes\nbrain\t65\nkidney\t46\n";
        let table = parse_delimited_str(tsv, b'\t', "stats.tsv").unwrap();

        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[1].name, "Number_of_TUSCO_Genes");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].cells[1], CellValue::Integer(46));
    }

    #[test]
    fn test_parse_with_empty_cells() {
        let csv = "Pipeline,cosim,extra\nPacBio,,1\nONT,0.97\n";
        let table = parse_delimited_str(csv, b',', "table_s1.csv").unwrap();

        assert_eq!(table.rows[0].cells[1], CellValue::Empty);
        // Short rows are padded
        assert_eq!(table.rows[1].cells[2], CellValue::Empty);
    }

    #[test]
    fn test_parse_long_row_truncated() {
        let csv = "a,b\n1,2,3\n";
        let table = parse_delimited_str(csv, b',', "t.csv").unwrap();
        assert_eq!(table.rows[0].cells.len(), 2);
    }

    #[test]
    fn test_delimiter_for_extension() {
        assert_eq!(delimiter_for("hsa/tusco_human_tissue_statistics.tsv"), b'\t');
        assert_eq!(delimiter_for("figure-03/tables/table_s1.csv"), b',');
        assert_eq!(delimiter_for("FIG.TSV"), b'\t');
    }

    #[test]
    fn test_count_data_lines_excludes_comments() {
        let content = "# generated by pipeline\n# version 2\nENSG1\tA\nENSG2\tB\nENSG3\tC\n";
        assert_eq!(count_data_lines_str(content), 3);
    }

    #[test]
    fn test_count_data_lines_marker_must_be_first_char() {
        let content = " # indented\nENSG1\n#comment\n";
        assert_eq!(count_data_lines_str(content), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_delimited("/nonexistent/dir/table.tsv", b'\t').unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert!(matches!(
            count_data_lines("/nonexistent/dir/tusco_human.tsv"),
            Err(Error::FileRead { .. })
        ));
    }
}
