use std::collections::BTreeMap;

use super::table::SalesTable;

/// (product category, summed total price)
pub type ProductSeries = Vec<(String, f64)>;

/// (hour of day, summed total price)
pub type HourSeries = Vec<(u32, f64)>;

/// Sum of total price per product category, ascending by sum.
///
/// Equal sums keep lexical category order.
pub fn aggregate_by_product(table: &SalesTable) -> ProductSeries {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in table {
        *totals.entry(record.product_line.as_str()).or_insert(0.0) += record.total_price;
    }

    let mut series: ProductSeries = totals
        .into_iter()
        .map(|(product, total)| (product.to_string(), total))
        .collect();
    // Stable: ties stay in the lexical order produced by the BTreeMap
    series.sort_by(|a, b| a.1.total_cmp(&b.1));
    series
}

/// Sum of total price per hour of day, ascending by hour.
///
/// Hours without sales are absent rather than zero.
pub fn aggregate_by_hour(table: &SalesTable) -> HourSeries {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for record in table {
        *totals.entry(record.hour).or_insert(0.0) += record.total_price;
    }
    totals.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_dashboard::table::fixtures::{
        record, sample_table, two_row_table,
    };

    fn table_total(table: &SalesTable) -> f64 {
        table.iter().map(|r| r.total_price).sum()
    }

    #[test]
    fn test_product_sums_partition_the_table() {
        let table = sample_table();
        let series = aggregate_by_product(&table);

        assert_eq!(series.len(), 4);
        let series_total: f64 = series.iter().map(|(_, v)| v).sum();
        assert!((series_total - table_total(&table)).abs() < 1e-9);

        for window in series.windows(2) {
            assert!(window[0].1 <= window[1].1);
        }
        assert_eq!(series.last().unwrap().0, "Electronic accessories");
    }

    #[test]
    fn test_product_ties_in_lexical_order() {
        let table = SalesTable::new(vec![
            record("1", "A", "Member", "Male", "Sports", 10.0, "09:00:00", 5.0),
            record("2", "A", "Member", "Male", "Fashion", 10.0, "09:00:00", 5.0),
            record("3", "A", "Member", "Male", "Food", 5.0, "09:00:00", 5.0),
        ]);
        let series = aggregate_by_product(&table);
        let labels: Vec<&str> = series.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Fashion", "Sports"]);
    }

    #[test]
    fn test_hour_series_ordered_by_hour_only_present_hours() {
        let table = sample_table();
        let series = aggregate_by_hour(&table);

        let hours: Vec<u32> = series.iter().map(|(h, _)| *h).collect();
        assert_eq!(hours, vec![10, 11, 13, 14, 18, 20]);
        for window in series.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
        // 13:08 and 13:23 fall into the same bucket
        let thirteen = series.iter().find(|(h, _)| *h == 13).unwrap().1;
        assert!((thirteen - (548.97 + 340.53)).abs() < 1e-9);

        let series_total: f64 = series.iter().map(|(_, v)| v).sum();
        assert!((series_total - table_total(&table)).abs() < 1e-9);
    }

    #[test]
    fn test_two_row_example() {
        let series = aggregate_by_product(&two_row_table());
        assert_eq!(
            series,
            vec![("Electronics".to_string(), 50.0), ("Food".to_string(), 100.0)]
        );
        assert_eq!(aggregate_by_hour(&two_row_table()), vec![(10, 100.0), (14, 50.0)]);
    }

    #[test]
    fn test_empty_table() {
        let table = SalesTable::default();
        assert!(aggregate_by_product(&table).is_empty());
        assert!(aggregate_by_hour(&table).is_empty());
    }
}
