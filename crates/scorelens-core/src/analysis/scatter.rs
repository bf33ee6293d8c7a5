/// Scatter point sets for subject-vs-subject plots.
use super::features::ScoreColumns;
use crate::model::Outcome;

/// One plotted student.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub outcome: Outcome,
    /// Row index in the record table.
    pub row: usize,
}

/// A titled point set with axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSeries {
    fn from_columns(
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        xs: &[f64],
        ys: &[f64],
        outcomes: &[Outcome],
    ) -> Self {
        let points = xs
            .iter()
            .zip(ys)
            .zip(outcomes)
            .enumerate()
            .map(|(row, ((&x, &y), &outcome))| ScatterPoint {
                x,
                y,
                outcome,
                row,
            })
            .collect();
        Self {
            title,
            x_label,
            y_label,
            points,
        }
    }

    /// Math on x, reading on y.
    pub fn math_vs_reading(scores: &ScoreColumns) -> Self {
        Self::from_columns(
            "Math vs Reading Scores",
            "Math Score",
            "Reading Score",
            &scores.math,
            &scores.reading,
            &scores.outcome,
        )
    }

    /// Math on x, writing on y.
    pub fn math_vs_writing(scores: &ScoreColumns) -> Self {
        Self::from_columns(
            "Math vs Writing Scores",
            "Math Score",
            "Writing Score",
            &scores.math,
            &scores.writing,
            &scores.outcome,
        )
    }

    /// `(min_x, max_x, min_y, max_y)` over all points.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold(
            (first.x, first.x, first.y, first.y),
            |(x0, x1, y0, y1), p| (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> ScoreColumns {
        ScoreColumns {
            math: vec![72.0, 47.0],
            reading: vec![90.0, 57.0],
            writing: vec![88.0, 44.0],
            average: vec![83.3, 49.3],
            outcome: vec![Outcome::Pass, Outcome::Fail],
        }
    }

    #[test]
    fn series_pair_math_with_each_subject() {
        let s = scores();
        let mr = ScatterSeries::math_vs_reading(&s);
        assert_eq!(mr.points[1].x, 47.0);
        assert_eq!(mr.points[1].y, 57.0);
        assert_eq!(mr.points[1].outcome, Outcome::Fail);
        assert_eq!(mr.points[1].row, 1);

        let mw = ScatterSeries::math_vs_writing(&s);
        assert_eq!(mw.points[0].y, 88.0);
        assert_eq!(mw.y_label, "Writing Score");
    }

    #[test]
    fn bounds_cover_all_points() {
        let mr = ScatterSeries::math_vs_reading(&scores());
        assert_eq!(mr.bounds(), Some((47.0, 72.0, 57.0, 90.0)));
    }
}
