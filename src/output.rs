//! Tab-delimited serialization.
//!
//! Records are rendered as a header plus one row per record, UTF-8
//! with a byte-order marker so spreadsheet imports pick the right
//! encoding. Fields are never quoted; embedded backslashes, tabs, and
//! line breaks are backslash-escaped. Embedded double quotes are
//! written through untouched, including inside the HYPERLINK formula
//! the title cell is rewritten into.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::Record;

/// Column labels, in output order.
pub const FIELD_LABELS: [&str; 5] = ["書名", "総合評価", "戦法", "著者", "発行年月"];

/// UTF-8 byte-order marker.
const BOM: &str = "\u{FEFF}";

/// Spreadsheet formula linking the title cell back to the review page.
#[must_use]
pub fn hyperlink_formula(url: &str, title: &str) -> String {
    format!(r#"=HYPERLINK("{url}","{title}")"#)
}

/// Backslash-escape the delimiter, line breaks, and the escape
/// character itself.
fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for ch in field.chars() {
        if matches!(ch, '\\' | '\t' | '\r' | '\n') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Render one record into its five output cells.
#[must_use]
pub fn render_row(record: &Record) -> [String; 5] {
    [
        hyperlink_formula(&record.source_url, &record.title),
        record.rating.clone(),
        record.strategies.join(", "),
        record.author.clone(),
        record.publication_date.clone(),
    ]
}

fn write_row<W: Write, S: AsRef<str>>(w: &mut W, fields: &[S]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join("\t");
    w.write_all(line.as_bytes())?;
    w.write_all(b"\r\n")
}

/// Serialize records (BOM, header, rows) into any writer.
pub fn write_tsv<W: Write>(w: &mut W, records: &[Record]) -> Result<()> {
    w.write_all(BOM.as_bytes())?;
    write_row(w, &FIELD_LABELS)?;
    for record in records {
        write_row(w, &render_row(record))?;
    }
    Ok(())
}

/// Write records to a file, replacing any previous run's output.
pub fn save_to_tsv(records: &[Record], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    write_tsv(&mut w, records)?;
    w.flush()?;

    info!(count = records.len(), path = %path.display(), "saved reviews");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TagSet;

    fn sample_record() -> Record {
        Record {
            title: "Book Title".to_string(),
            author: "Author Name".to_string(),
            rating: "A".to_string(),
            strategies: ["居飛車", "振り飛車"].into_iter().collect::<TagSet>(),
            publication_date: "2021年8月".to_string(),
            source_url: "https://example.com/1/1-1.htm".to_string(),
        }
    }

    fn rendered(records: &[Record]) -> String {
        let mut buf = Vec::new();
        write_tsv(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_starts_with_bom_and_header() {
        let out = rendered(&[]);
        assert!(out.starts_with('\u{FEFF}'));
        assert_eq!(out, "\u{FEFF}書名\t総合評価\t戦法\t著者\t発行年月\r\n");
    }

    #[test]
    fn test_row_field_order_and_hyperlink_title() {
        let out = rendered(&[sample_record()]);
        let body = out.lines().nth(1).unwrap();

        assert_eq!(
            body,
            "=HYPERLINK(\"https://example.com/1/1-1.htm\",\"Book Title\")\tA\t居飛車, 振り飛車\tAuthor Name\t2021年8月"
        );
    }

    #[test]
    fn test_rows_end_with_crlf() {
        let out = rendered(&[sample_record()]);
        assert!(out.ends_with("\r\n"));
        assert_eq!(out.matches("\r\n").count(), 2);
    }

    #[test]
    fn test_embedded_delimiter_is_escaped() {
        let record = Record {
            author: "将棋\t連盟".to_string(),
            source_url: "https://example.com/1/1-1.htm".to_string(),
            ..Record::default()
        };

        let out = rendered(&[record]);
        assert!(out.contains("将棋\\\t連盟"));
    }

    #[test]
    fn test_backslash_is_escaped() {
        assert_eq!(escape_field(r"a\b"), r"a\\b");
        assert_eq!(escape_field("a\nb"), "a\\\nb");
    }

    #[test]
    fn test_embedded_quotes_pass_through_unescaped() {
        // Observed output-format behavior: quotes are written as-is,
        // even though a quoted author would confuse the formula cell.
        let record = Record {
            author: "\"Sugar\"".to_string(),
            source_url: "https://example.com/1/1-1.htm".to_string(),
            ..Record::default()
        };

        let out = rendered(&[record]);
        assert!(out.contains("\t\"Sugar\"\t"));
    }

    #[test]
    fn test_empty_fields_produce_empty_cells() {
        let record = Record {
            source_url: "https://example.com/1/1-1.htm".to_string(),
            ..Record::default()
        };

        let out = rendered(&[record]);
        let body = out.lines().nth(1).unwrap();
        assert_eq!(
            body,
            "=HYPERLINK(\"https://example.com/1/1-1.htm\",\"\")\t\t\t\t"
        );
    }
}
