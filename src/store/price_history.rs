use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{DateBounds, StockRecord};

/// The loaded price table. Immutable after construction and cheap to clone.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    records: Arc<[StockRecord]>,
}

impl PriceHistory {
    /// Sorts by date. The sort is stable, so rows sharing a date keep file order.
    pub fn new(mut records: Vec<StockRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self {
            records: records.into(),
        }
    }

    #[cfg(test)]
    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn bounds(&self) -> Option<DateBounds> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(DateBounds {
            min_date: first.date,
            max_date: last.date,
        })
    }

    /// Records with `start <= date <= end`. Empty when `start > end`.
    pub fn select(&self, start: NaiveDate, end: NaiveDate) -> &[StockRecord] {
        if start > end {
            return &[];
        }
        let lo = self.records.partition_point(|r| r.date < start);
        let hi = self.records.partition_point(|r| r.date <= end);
        &self.records[lo..hi]
    }
}
