use chrono::{NaiveDate, NaiveTime};

/// One sale as read from the spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Unique row key, never displayed
    pub order_id: String,
    pub city: String,
    pub customer_type: String,
    pub gender: String,
    pub product_line: String,
    pub unit_price: f64,
    pub quantity: i64,
    /// Unit price x quantity x tax factor, as stored in the source
    pub total_price: f64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// 0..=10
    pub rating: f64,
    /// Derived from `time` at load
    pub hour: u32,
}

/// In-memory sales table. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<TransactionRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a SalesTable {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<TransactionRecord> for SalesTable {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::Timelike;

    /// Builds a record with the fields the pipeline looks at
    pub fn record(
        order_id: &str,
        city: &str,
        customer_type: &str,
        gender: &str,
        product_line: &str,
        total_price: f64,
        time: &str,
        rating: f64,
    ) -> TransactionRecord {
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap();
        TransactionRecord {
            order_id: order_id.to_string(),
            city: city.to_string(),
            customer_type: customer_type.to_string(),
            gender: gender.to_string(),
            product_line: product_line.to_string(),
            unit_price: total_price,
            quantity: 1,
            total_price,
            date: NaiveDate::from_ymd_opt(2019, 1, 5).unwrap(),
            time,
            rating,
            hour: time.hour(),
        }
    }

    /// The two-row table used throughout the pipeline tests
    pub fn two_row_table() -> SalesTable {
        SalesTable::new(vec![
            record("750-67-8428", "A", "Member", "Female", "Food", 100.0, "10:29:00", 9.0),
            record("226-31-3081", "B", "Normal", "Male", "Electronics", 50.0, "14:05:00", 6.0),
        ])
    }

    pub fn sample_table() -> SalesTable {
        SalesTable::new(vec![
            record("101", "Yangon", "Member", "Female", "Health and beauty", 548.97, "13:08:00", 9.1),
            record("102", "Naypyitaw", "Normal", "Female", "Electronic accessories", 80.22, "10:29:00", 9.6),
            record("103", "Yangon", "Normal", "Male", "Home and lifestyle", 340.53, "13:23:00", 7.4),
            record("104", "Yangon", "Member", "Male", "Health and beauty", 489.05, "20:33:00", 8.4),
            record("105", "Yangon", "Normal", "Male", "Sports and travel", 634.38, "10:37:00", 5.3),
            record("106", "Naypyitaw", "Normal", "Male", "Electronic accessories", 627.62, "18:30:00", 4.1),
            record("107", "Mandalay", "Member", "Female", "Electronic accessories", 433.69, "14:36:00", 5.8),
            record("108", "Naypyitaw", "Normal", "Female", "Home and lifestyle", 772.38, "11:38:00", 8.0),
        ])
    }
}
