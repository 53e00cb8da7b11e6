use charming::{
    component::{Axis, Grid, Title},
    element::{AxisPointer, AxisPointerType, AxisType, Tooltip, Trigger},
    series::bar,
    Chart,
};
use contracts::dashboards::d100_sales_dashboard::{BarOrientation, BarSpec, ChartSpec};

use super::aggregate::{HourSeries, ProductSeries};

pub const PRODUCT_CHART_TITLE: &str = "Sales by Product Category";
pub const HOUR_CHART_TITLE: &str = "Sales by Hour";

const TOTAL_PRICE_LABEL: &str = "Total price";

/// Horizontal bars, one per product category, in series order
pub fn render_product_chart(series: &ProductSeries) -> ChartSpec {
    let bars = series
        .iter()
        .map(|(product, total)| BarSpec {
            label: product.clone(),
            value: *total,
        })
        .collect();
    chart_spec(
        PRODUCT_CHART_TITLE,
        BarOrientation::Horizontal,
        "Product category",
        bars,
    )
}

/// Vertical bars, one per hour that has sales
pub fn render_hour_chart(series: &HourSeries) -> ChartSpec {
    let bars = series
        .iter()
        .map(|(hour, total)| BarSpec {
            label: hour.to_string(),
            value: *total,
        })
        .collect();
    chart_spec(HOUR_CHART_TITLE, BarOrientation::Vertical, "Hour", bars)
}

fn chart_spec(
    title: &str,
    orientation: BarOrientation,
    category_axis_label: &str,
    bars: Vec<BarSpec>,
) -> ChartSpec {
    let option = bar_chart(title, orientation, category_axis_label, &bars).to_string();
    ChartSpec {
        title: title.to_string(),
        orientation,
        category_axis_label: category_axis_label.to_string(),
        value_axis_label: TOTAL_PRICE_LABEL.to_string(),
        bars,
        option,
    }
}

/// Single-series bar chart; the category axis is y for horizontal bars
fn bar_chart(
    title: &str,
    orientation: BarOrientation,
    category_axis_label: &str,
    bars: &[BarSpec],
) -> Chart {
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();

    let category_axis = Axis::new()
        .type_(AxisType::Category)
        .name(category_axis_label)
        .data(labels);
    let value_axis = Axis::new().type_(AxisType::Value).name(TOTAL_PRICE_LABEL);

    let (x_axis, y_axis) = match orientation {
        BarOrientation::Horizontal => (value_axis, category_axis),
        BarOrientation::Vertical => (category_axis, value_axis),
    };

    Chart::new()
        .title(Title::new().text(title))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .series(bar::Bar::new().name(TOTAL_PRICE_LABEL).data(values))
}
