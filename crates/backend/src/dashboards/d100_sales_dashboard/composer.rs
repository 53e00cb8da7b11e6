use contracts::dashboards::d100_sales_dashboard::{
    DashboardPage, KpiPanel, PageConfig, SalesKpis,
};
use contracts::shared::format::{format_mean, format_thousands, round_half_even};

use super::aggregate::{aggregate_by_hour, aggregate_by_product};
use super::charts::{render_hour_chart, render_product_chart};
use super::table::SalesTable;

pub const CURRENCY_PREFIX: &str = "RMB ¥";
const STAR: &str = "⭐";

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// KPIs over the filtered table. Means of an empty table are `None`.
pub fn compute_kpis(table: &SalesTable) -> SalesKpis {
    let total: f64 = table.iter().map(|r| r.total_price).sum();
    let average_rating = mean(table.iter().map(|r| r.rating)).map(|m| round_half_even(m, 1));
    let star_count = average_rating
        .map(|r| round_half_even(r, 0).max(0.0) as u32)
        .unwrap_or(0);
    let average_sale = mean(table.iter().map(|r| r.total_price)).map(|m| round_half_even(m, 2));

    SalesKpis {
        total_sales: total.trunc() as i64,
        average_rating,
        star_count,
        average_sale,
    }
}

/// Labelled panels, left to right: total sales, average rating, average sale
pub fn kpi_panels(kpis: &SalesKpis) -> Vec<KpiPanel> {
    let rating = format_mean(kpis.average_rating, 1);
    let stars = STAR.repeat(kpis.star_count as usize);
    let rating_display = if stars.is_empty() {
        rating
    } else {
        format!("{} {}", rating, stars)
    };

    vec![
        KpiPanel {
            label: "Total sales:".to_string(),
            display: format!("{} {}", CURRENCY_PREFIX, format_thousands(kpis.total_sales)),
        },
        KpiPanel {
            label: "Average customer rating:".to_string(),
            display: rating_display,
        },
        KpiPanel {
            label: "Average sale per transaction:".to_string(),
            display: format!("{} {}", CURRENCY_PREFIX, format_mean(kpis.average_sale, 2)),
        },
    ]
}

/// Lay out the page for an already filtered table.
///
/// Hour chart on the left, product chart on the right.
pub fn compose_page(page: &PageConfig, filtered: &SalesTable, total_row_count: usize) -> DashboardPage {
    let kpis = compute_kpis(filtered);
    let kpi_panels = kpi_panels(&kpis);

    DashboardPage {
        heading: page.heading(),
        kpis,
        kpi_panels,
        left_chart: render_hour_chart(&aggregate_by_hour(filtered)),
        right_chart: render_product_chart(&aggregate_by_product(filtered)),
        row_count: filtered.len(),
        total_row_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_dashboard::table::fixtures::{
        record, sample_table, two_row_table,
    };

    #[test]
    fn test_kpis_two_rows() {
        let kpis = compute_kpis(&two_row_table());
        assert_eq!(kpis.total_sales, 150);
        assert_eq!(kpis.average_rating, Some(7.5));
        // 7.5 rounds half to even
        assert_eq!(kpis.star_count, 8);
        assert_eq!(kpis.average_sale, Some(75.0));
    }

    #[test]
    fn test_kpis_sample() {
        let kpis = compute_kpis(&sample_table());
        // 3926.84 total
        assert_eq!(kpis.total_sales, 3926);
        // mean rating 57.7 / 8 = 7.2125
        assert_eq!(kpis.average_rating, Some(7.2));
        assert_eq!(kpis.star_count, 7);
        assert_eq!(kpis.average_sale, Some(490.86));
    }

    #[test]
    fn test_star_count_uses_half_even() {
        let table = SalesTable::new(vec![
            record("1", "A", "Member", "Male", "Food", 1.0, "09:00:00", 6.0),
            record("2", "A", "Member", "Male", "Food", 1.0, "09:00:00", 7.0),
        ]);
        let kpis = compute_kpis(&table);
        assert_eq!(kpis.average_rating, Some(6.5));
        assert_eq!(kpis.star_count, 6);
    }

    #[test]
    fn test_kpis_empty_table_degrade() {
        let kpis = compute_kpis(&SalesTable::default());
        assert_eq!(kpis.total_sales, 0);
        assert_eq!(kpis.average_rating, None);
        assert_eq!(kpis.star_count, 0);
        assert_eq!(kpis.average_sale, None);

        let panels = kpi_panels(&kpis);
        assert_eq!(panels[0].display, "RMB ¥ 0");
        assert_eq!(panels[1].display, "NaN");
        assert_eq!(panels[2].display, "RMB ¥ NaN");
    }

    #[test]
    fn test_panel_text() {
        let kpis = SalesKpis {
            total_sales: 322_966,
            average_rating: Some(7.0),
            star_count: 7,
            average_sale: Some(322.97),
        };
        let panels = kpi_panels(&kpis);
        assert_eq!(panels.len(), 3);
        assert_eq!(panels[0].label, "Total sales:");
        assert_eq!(panels[0].display, "RMB ¥ 322,966");
        assert_eq!(panels[1].display, "7.0 ⭐⭐⭐⭐⭐⭐⭐");
        assert_eq!(panels[2].display, "RMB ¥ 322.97");
    }

    #[test]
    fn test_compose_page_layout() {
        let table = two_row_table();
        let page = compose_page(&PageConfig::default(), &table, 10);
        assert_eq!(page.heading, "📊 Sales Dashboard");
        assert_eq!(page.left_chart.title, "Sales by Hour");
        assert_eq!(page.right_chart.title, "Sales by Product Category");
        assert_eq!(page.row_count, 2);
        assert_eq!(page.total_row_count, 10);
    }
}
