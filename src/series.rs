use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::graph::edge::Year;

/// Year-keyed output series, iterated in ascending year order.
pub type YearSeries<T> = BTreeMap<Year, T>;

/// An inclusive span of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct YearRange {
    pub first: Year,
    pub last: Year,
}

impl YearRange {
    /// The smallest range covering every year in `years`, or `None` when there are none.
    pub fn spanning<I>(years: I) -> Option<Self>
    where
        I: IntoIterator<Item = Year>,
    {
        years.into_iter().fold(None, |acc, year| match acc {
            None => Some(Self {
                first: year,
                last: year,
            }),
            Some(r) => Some(Self {
                first: r.first.min(year),
                last: r.last.max(year),
            }),
        })
    }

    pub fn years(&self) -> RangeInclusive<Year> {
        self.first..=self.last
    }

    /// Number of years in the range, both ends included.
    pub fn span(&self) -> usize {
        (i64::from(self.last) - i64::from(self.first) + 1) as usize
    }
}

/// Materialise a dense series over `range`.
///
/// Every year in the range gets an entry: `lookup(year)` when it returns a value,
/// `zero` otherwise.
pub fn densify<T, F>(range: YearRange, zero: T, mut lookup: F) -> YearSeries<T>
where
    T: Clone,
    F: FnMut(Year) -> Option<T>,
{
    range
        .years()
        .map(|year| (year, lookup(year).unwrap_or_else(|| zero.clone())))
        .collect()
}
