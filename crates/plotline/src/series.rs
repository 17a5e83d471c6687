use itertools::Itertools;

/// An ordered sequence of integers, plotted against its own indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericSeries {
    values: Vec<i64>,
}

impl NumericSeries {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Smallest and largest value, or `None` for an empty series.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        self.values.iter().copied().minmax().into_option()
    }

    /// The series as `(index, value)` points, in file order.
    pub fn points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as i64, *value))
    }
}

impl From<Vec<i64>> for NumericSeries {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i64> for NumericSeries {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_series() {
        assert_eq!(NumericSeries::default().bounds(), None);
    }

    #[test]
    fn bounds_of_single_value() {
        let series = NumericSeries::new(vec![7]);
        assert_eq!(series.bounds(), Some((7, 7)));
    }

    #[test]
    fn bounds_span_negatives() {
        let series = NumericSeries::new(vec![3, -10, 4, 25]);
        assert_eq!(series.bounds(), Some((-10, 25)));
    }

    #[test]
    fn points_are_indexed_in_order() {
        let series: NumericSeries = [5, 6, 7].into_iter().collect();
        let points = series.points().collect::<Vec<_>>();
        assert_eq!(points, vec![(0, 5), (1, 6), (2, 7)]);
    }
}
