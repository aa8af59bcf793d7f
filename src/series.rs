//! Price chart series
//!
//! An append-only, chronologically ordered list of price points. Series are
//! shared behind an `Arc`, so a call that does not add a point hands back the
//! very same allocation and callers can detect "nothing changed" with
//! [`ChartSeries::ptr_eq`].

use std::sync::Arc;

/// One sampled price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub value: f64,
}

impl PricePoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered sequence of [`PricePoint`]s.
///
/// Consecutive points never share a timestamp or a value, and timestamps are
/// non-decreasing as long as callers feed wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    points: Arc<Vec<PricePoint>>,
}

impl ChartSeries {
    fn single(point: PricePoint) -> Self {
        Self {
            points: Arc::new(vec![point]),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// True when both series share the same allocation.
    pub fn ptr_eq(&self, other: &ChartSeries) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }

    /// Points as `(x, y)` pairs for plotting.
    pub fn as_plot_data(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.timestamp as f64, p.value))
            .collect()
    }

    /// First and last timestamps.
    pub fn time_bounds(&self) -> Option<(i64, i64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.timestamp, last.timestamp))
    }

    /// Lowest and highest values.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.value, p.value)),
            Some((lo, hi)) => Some((lo.min(p.value), hi.max(p.value))),
        })
    }
}

/// Adds `(timestamp, value)` to `series` unless it repeats the last point.
///
/// A point is dropped when its timestamp **or** its value equals the last
/// point's, which also discards a moved clock with an unmoved price. Dropping
/// returns `series` itself without allocating.
pub fn append(series: Option<&ChartSeries>, timestamp: i64, value: f64) -> ChartSeries {
    let point = PricePoint::new(timestamp, value);
    let Some(series) = series else {
        return ChartSeries::single(point);
    };
    let Some(last) = series.last() else {
        return ChartSeries::single(point);
    };

    if last.timestamp == timestamp || last.value == value {
        return series.clone();
    }

    let mut points = Vec::with_capacity(series.len() + 1);
    points.extend_from_slice(series.points());
    points.push(point);
    ChartSeries {
        points: Arc::new(points),
    }
}
