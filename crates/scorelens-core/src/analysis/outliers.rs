/// Outlier selector -- rows whose math and reading standings disagree.
///
/// A row qualifies when one subject is strictly above its column median
/// while the other is strictly below its own. A score equal to its median
/// never counts as above or below, so median ties are never outliers.
use super::features::ScoreColumns;
use super::stats::median;
use tracing::debug;

/// Result of the outlier pass: the medians used and the matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierSelection {
    /// Median of the math column, `None` for an empty table.
    pub math_median: Option<f64>,
    /// Median of the reading column, `None` for an empty table.
    pub reading_median: Option<f64>,
    /// Indices of qualifying rows, ascending.
    pub rows: Vec<usize>,
}

impl OutlierSelection {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Whether a single (math, reading) pair diverges around the given medians.
pub fn is_divergent(math: f64, reading: f64, math_median: f64, reading_median: f64) -> bool {
    (math > math_median && reading < reading_median)
        || (reading > reading_median && math < math_median)
}

/// Select divergent rows using medians computed from the full columns.
pub fn select_outliers(scores: &ScoreColumns) -> OutlierSelection {
    let math_median = median(&scores.math);
    let reading_median = median(&scores.reading);

    let rows = match (math_median, reading_median) {
        (Some(mm), Some(rm)) => scores
            .math
            .iter()
            .zip(&scores.reading)
            .enumerate()
            .filter(|&(_, (&m, &r))| is_divergent(m, r, mm, rm))
            .map(|(i, _)| i)
            .collect(),
        _ => Vec::new(),
    };

    debug!(
        ?math_median,
        ?reading_median,
        outliers = rows.len(),
        "Selected outliers"
    );

    OutlierSelection {
        math_median,
        reading_median,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome;

    fn scores(math: &[f64], reading: &[f64]) -> ScoreColumns {
        ScoreColumns {
            math: math.to_vec(),
            reading: reading.to_vec(),
            writing: vec![0.0; math.len()],
            average: vec![0.0; math.len()],
            outcome: vec![Outcome::Fail; math.len()],
        }
    }

    #[test]
    fn both_divergence_directions_are_selected() {
        // Medians: math 50, reading 50.
        let s = scores(&[80.0, 20.0, 50.0, 90.0, 10.0], &[20.0, 80.0, 50.0, 90.0, 10.0]);
        let sel = select_outliers(&s);
        assert_eq!(sel.math_median, Some(50.0));
        assert_eq!(sel.reading_median, Some(50.0));
        assert_eq!(sel.rows, vec![0, 1]);
    }

    /// A single row sits exactly on both medians and is never an outlier.
    #[test]
    fn single_row_is_never_an_outlier() {
        let sel = select_outliers(&scores(&[90.0], &[30.0]));
        assert_eq!(sel.math_median, Some(90.0));
        assert_eq!(sel.reading_median, Some(30.0));
        assert!(sel.is_empty());
    }

    /// Rows at either median are excluded from both branches.
    #[test]
    fn median_ties_are_excluded() {
        // Medians: math 50, reading 50. Row 1 is at the math median with a low
        // reading; row 2 is at the reading median with a high math.
        let s = scores(&[40.0, 50.0, 70.0], &[60.0, 10.0, 50.0]);
        let sel = select_outliers(&s);
        assert_eq!(sel.rows, vec![0]);
    }

    #[test]
    fn membership_matches_predicate() {
        let math = [35.0, 62.0, 88.0, 47.0, 71.0, 55.0, 90.0, 12.0];
        let reading = [70.0, 41.0, 93.0, 47.0, 38.0, 55.0, 15.0, 64.0];
        let sel = select_outliers(&scores(&math, &reading));
        let mm = sel.math_median.unwrap();
        let rm = sel.reading_median.unwrap();
        for i in 0..math.len() {
            let expected = (math[i] > mm && reading[i] < rm) || (reading[i] > rm && math[i] < mm);
            assert_eq!(sel.rows.contains(&i), expected, "row {i}");
        }
    }

    #[test]
    fn empty_scores_have_no_medians() {
        let sel = select_outliers(&scores(&[], &[]));
        assert_eq!(sel.math_median, None);
        assert!(sel.is_empty());
    }
}
