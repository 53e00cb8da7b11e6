use serde::{Deserialize, Serialize};

/// Direction in which the bars grow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    /// Bars grow left to right, categories on the vertical axis
    Horizontal,
    /// Bars grow bottom to top, categories on the horizontal axis
    Vertical,
}

/// One bar: category label and summed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    pub label: String,
    pub value: f64,
}

/// Renderable description of a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub orientation: BarOrientation,
    /// Axis that carries the category labels
    pub category_axis_label: String,
    /// Axis that carries the bar length
    pub value_axis_label: String,
    /// Bars in drawing order
    pub bars: Vec<BarSpec>,
    /// ECharts option object, serialized as JSON
    pub option: String,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
