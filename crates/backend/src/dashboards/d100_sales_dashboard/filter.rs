use contracts::dashboards::d100_sales_dashboard::{FilterDimension, FilterOptions, FilterSelection};
use std::collections::HashSet;

use super::table::{SalesTable, TransactionRecord};

fn dimension_value(record: &TransactionRecord, dimension: FilterDimension) -> &str {
    match dimension {
        FilterDimension::City => &record.city,
        FilterDimension::CustomerType => &record.customer_type,
        FilterDimension::Gender => &record.gender,
    }
}

/// Distinct values of one dimension in first-seen order
pub fn distinct_values(table: &SalesTable, dimension: FilterDimension) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .iter()
        .map(|r| dimension_value(r, dimension))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Options for the three multi-selects
pub fn filter_options(table: &SalesTable) -> FilterOptions {
    FilterOptions {
        cities: distinct_values(table, FilterDimension::City),
        customer_types: distinct_values(table, FilterDimension::CustomerType),
        genders: distinct_values(table, FilterDimension::Gender),
    }
}

/// Rows whose city, customer type and gender are all selected.
///
/// Returns a fresh table in source order; the source is never modified.
/// An empty selection in any dimension yields an empty table.
pub fn apply_filters(table: &SalesTable, selection: &FilterSelection) -> SalesTable {
    if selection.has_empty_dimension() {
        return SalesTable::default();
    }

    let allowed: Vec<(FilterDimension, HashSet<&str>)> = FilterDimension::ALL
        .iter()
        .map(|d| (*d, selection.values(*d).iter().map(String::as_str).collect()))
        .collect();

    table
        .iter()
        .filter(|record| {
            allowed
                .iter()
                .all(|(dimension, values)| values.contains(dimension_value(record, *dimension)))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_dashboard::table::fixtures::{sample_table, two_row_table};

    #[test]
    fn test_options_in_first_seen_order() {
        let options = filter_options(&sample_table());
        assert_eq!(options.cities, vec!["Yangon", "Naypyitaw", "Mandalay"]);
        assert_eq!(options.customer_types, vec!["Member", "Normal"]);
        assert_eq!(options.genders, vec!["Female", "Male"]);
    }

    #[test]
    fn test_full_selection_reproduces_table() {
        let table = sample_table();
        let selection = filter_options(&table).default_selection();
        assert_eq!(apply_filters(&table, &selection), table);
    }

    #[test]
    fn test_filtered_rows_satisfy_every_predicate() {
        let table = sample_table();
        let selection = filter_options(&table)
            .default_selection()
            .with_values(FilterDimension::City, vec!["Yangon".into(), "Mandalay".into()])
            .with_values(FilterDimension::Gender, vec!["Female".into()]);

        let filtered = apply_filters(&table, &selection);
        assert_eq!(filtered.len(), 2);
        for record in &filtered {
            assert!(table.records().contains(record));
            assert!(selection.is_selected(FilterDimension::City, &record.city));
            assert!(selection.is_selected(FilterDimension::CustomerType, &record.customer_type));
            assert!(selection.is_selected(FilterDimension::Gender, &record.gender));
        }
    }

    #[test]
    fn test_single_city() {
        let table = two_row_table();
        let selection = filter_options(&table)
            .default_selection()
            .with_values(FilterDimension::City, vec!["A".into()]);
        let filtered = apply_filters(&table, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].product_line, "Food");
    }

    #[test]
    fn test_empty_dimension_yields_empty_table() {
        let table = sample_table();
        for dimension in FilterDimension::ALL {
            let selection = filter_options(&table)
                .default_selection()
                .with_values(dimension, vec![]);
            assert!(selection.has_empty_dimension());
            assert!(apply_filters(&table, &selection).is_empty());
        }
    }

    #[test]
    fn test_unknown_values_match_nothing() {
        let table = two_row_table();
        let selection = filter_options(&table)
            .default_selection()
            .with_values(FilterDimension::City, vec!["Z".into()]);
        assert!(apply_filters(&table, &selection).is_empty());
    }
}
