/// Stacked histogram of `average_score`, split by outcome.
///
/// Bin width follows the "auto" rule: the narrower of the Sturges and
/// Freedman–Diaconis widths, falling back to Sturges when the
/// interquartile range is zero. Bins are equal-width over `[min, max]`;
/// every bin is half-open except the last, which also holds `max`.
use super::stats::quantile_sorted;
use crate::model::Outcome;

/// Upper bound on the number of bins, whatever the data.
pub const MAX_BINS: usize = 200;

/// One histogram bar with its per-outcome counts.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub pass: usize,
    pub fail: usize,
}

impl HistogramBin {
    pub fn total(&self) -> usize {
        self.pass + self.fail
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Pass => self.pass,
            Outcome::Fail => self.fail,
        }
    }
}

/// Equal-width bins covering every value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Tallest stacked bar, for scaling the y-axis.
    pub fn max_total(&self) -> usize {
        self.bins.iter().map(HistogramBin::total).max().unwrap_or(0)
    }

    /// `(min, max)` of the bin edges.
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.start, self.bins.last()?.end))
    }
}

/// Number of bins chosen by the "auto" rule for `sorted` (ascending, non-empty).
fn auto_bin_count(sorted: &[f64]) -> usize {
    let n = sorted.len() as f64;
    let span = sorted[sorted.len() - 1] - sorted[0];
    if span <= 0.0 {
        return 1;
    }

    let sturges = span / (n.log2() + 1.0);
    let iqr = quantile_sorted(sorted, 0.75) - quantile_sorted(sorted, 0.25);
    let fd = 2.0 * iqr * n.powf(-1.0 / 3.0);
    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };

    ((span / width).ceil() as usize).clamp(1, MAX_BINS)
}

/// Bin `values` and tally outcomes per bin.
///
/// `outcomes` must be aligned with `values`. `fixed_bins` overrides the
/// automatic bin count. An empty input gives an empty histogram.
pub fn build_histogram(
    values: &[f64],
    outcomes: &[Outcome],
    fixed_bins: Option<usize>,
) -> Histogram {
    if values.is_empty() {
        return Histogram::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut lo = sorted[0];
    let mut hi = sorted[sorted.len() - 1];

    let bin_count = match fixed_bins {
        Some(n) => n.clamp(1, MAX_BINS),
        None => auto_bin_count(&sorted),
    };

    if hi <= lo {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bin_count {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            pass: 0,
            fail: 0,
        })
        .collect();

    for (&value, outcome) in values.iter().zip(outcomes) {
        let idx = (((value - lo) / width).floor() as usize).min(bin_count - 1);
        match outcome {
            Outcome::Pass => bins[idx].pass += 1,
            Outcome::Fail => bins[idx].fail += 1,
        }
    }

    Histogram { bins }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes_for(values: &[f64]) -> Vec<Outcome> {
        values.iter().map(|&v| Outcome::classify(v, 50.0)).collect()
    }

    #[test]
    fn every_value_lands_in_exactly_one_bin() {
        let values = [12.0, 33.3, 47.0, 50.0, 50.0, 64.7, 78.0, 91.0, 100.0];
        let hist = build_histogram(&values, &outcomes_for(&values), None);
        let total: usize = hist.bins.iter().map(HistogramBin::total).sum();
        assert_eq!(total, values.len());
        assert_eq!(hist.range(), Some((12.0, 100.0)));
    }

    /// The maximum value belongs to the last bin, not past it.
    #[test]
    fn max_value_goes_in_last_bin() {
        let values = [0.0, 10.0];
        let hist = build_histogram(&values, &outcomes_for(&values), Some(2));
        assert_eq!(hist.bins.len(), 2);
        assert_eq!(hist.bins[0].total(), 1);
        assert_eq!(hist.bins[1].total(), 1);
        assert_eq!(hist.bins[1].end, 10.0);
    }

    #[test]
    fn outcomes_are_stacked_per_bin() {
        let values = [10.0, 20.0, 80.0, 90.0];
        let hist = build_histogram(&values, &outcomes_for(&values), Some(2));
        assert_eq!(hist.bins[0].count(Outcome::Fail), 2);
        assert_eq!(hist.bins[0].count(Outcome::Pass), 0);
        assert_eq!(hist.bins[1].count(Outcome::Pass), 2);
        assert_eq!(hist.max_total(), 2);
    }

    /// Identical values produce one bin centred on the value.
    #[test]
    fn constant_values_use_unit_bin() {
        let values = [70.0, 70.0, 70.0];
        let hist = build_histogram(&values, &outcomes_for(&values), None);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.range(), Some((69.5, 70.5)));
        assert_eq!(hist.bins[0].pass, 3);
    }

    #[test]
    fn auto_rule_matches_sturges_for_small_samples() {
        // n = 4, span = 30, IQR = 15: Sturges width 10, FD width ~18.9.
        let values = [10.0, 20.0, 30.0, 40.0];
        let hist = build_histogram(&values, &outcomes_for(&values), None);
        assert_eq!(hist.bins.len(), 3);
    }

    #[test]
    fn empty_input_gives_empty_histogram() {
        let hist = build_histogram(&[], &[], None);
        assert!(hist.is_empty());
        assert_eq!(hist.max_total(), 0);
        assert_eq!(hist.range(), None);
    }
}
