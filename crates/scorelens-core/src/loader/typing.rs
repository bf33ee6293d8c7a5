/// Per-column cell typing.
///
/// A column is numeric when every non-empty cell parses as a finite number;
/// a single stray word turns the whole column into text.
use crate::model::Value;
use compact_str::CompactString;

/// Markers read as an empty cell.
const NA_MARKERS: &[&str] = &["", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "#N/A"];

fn is_missing(raw: &str) -> bool {
    NA_MARKERS.contains(&raw.trim())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Convert raw string rows into typed rows, deciding each column's kind
/// from all of its cells.
pub fn type_columns(column_count: usize, raw_rows: Vec<Vec<String>>) -> Vec<Vec<Value>> {
    let numeric: Vec<bool> = (0..column_count)
        .map(|col| {
            raw_rows
                .iter()
                .map(|row| row[col].as_str())
                .filter(|cell| !is_missing(cell))
                .all(|cell| parse_number(cell).is_some())
        })
        .collect();

    raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&numeric)
                .map(|(cell, &is_numeric)| {
                    if is_missing(&cell) {
                        Value::Missing
                    } else if is_numeric {
                        // Checked above; a failed parse here cannot happen.
                        parse_number(&cell).map_or(Value::Missing, Value::Number)
                    } else {
                        Value::Text(CompactString::from(cell))
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn numeric_column_with_gaps_stays_numeric() {
        let typed = type_columns(1, rows(&[&["72"], &[""], &[" 88 "], &["NA"]]));
        assert_eq!(
            typed,
            vec![
                vec![Value::Number(72.0)],
                vec![Value::Missing],
                vec![Value::Number(88.0)],
                vec![Value::Missing],
            ]
        );
    }

    /// One non-numeric cell demotes the whole column to text.
    #[test]
    fn one_word_makes_the_column_text() {
        let typed = type_columns(1, rows(&[&["72"], &["absent"]]));
        assert_eq!(typed[0][0], Value::Text(CompactString::new("72")));
        assert_eq!(typed[1][0], Value::Text(CompactString::new("absent")));
    }

    #[test]
    fn infinities_are_not_numbers() {
        let typed = type_columns(1, rows(&[&["inf"]]));
        assert!(matches!(typed[0][0], Value::Text(_)));
    }

    #[test]
    fn columns_are_typed_independently() {
        let typed = type_columns(2, rows(&[&["female", "60"], &["male", "70"]]));
        assert!(matches!(typed[0][0], Value::Text(_)));
        assert_eq!(typed[1][1], Value::Number(70.0));
    }
}
