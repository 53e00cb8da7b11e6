use serde::{Deserialize, Serialize};

/// One of the three categorical filter dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    City,
    CustomerType,
    Gender,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::City,
        FilterDimension::CustomerType,
        FilterDimension::Gender,
    ];

    /// Prompt shown above the multi-select
    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::City => "Select city:",
            FilterDimension::CustomerType => "Select customer type:",
            FilterDimension::Gender => "Select gender:",
        }
    }
}

/// Values currently selected in each dimension.
///
/// An empty list means nothing is selected, which matches zero rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub cities: Vec<String>,
    pub customer_types: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterSelection {
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::City => &self.cities,
            FilterDimension::CustomerType => &self.customer_types,
            FilterDimension::Gender => &self.genders,
        }
    }

    fn values_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::City => &mut self.cities,
            FilterDimension::CustomerType => &mut self.customer_types,
            FilterDimension::Gender => &mut self.genders,
        }
    }

    pub fn is_selected(&self, dimension: FilterDimension, value: &str) -> bool {
        self.values(dimension).iter().any(|v| v == value)
    }

    /// Returns a copy with `value` added to or removed from `dimension`
    pub fn toggled(&self, dimension: FilterDimension, value: &str) -> Self {
        let mut next = self.clone();
        let values = next.values_mut(dimension);
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }
        next
    }

    /// Returns a copy with `dimension` replaced by `values`
    pub fn with_values(&self, dimension: FilterDimension, values: Vec<String>) -> Self {
        let mut next = self.clone();
        *next.values_mut(dimension) = values;
        next
    }

    /// True when some dimension has nothing selected
    pub fn has_empty_dimension(&self) -> bool {
        FilterDimension::ALL
            .iter()
            .any(|d| self.values(*d).is_empty())
    }
}

/// Distinct values observed in the loaded table, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub customer_types: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterOptions {
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::City => &self.cities,
            FilterDimension::CustomerType => &self.customer_types,
            FilterDimension::Gender => &self.genders,
        }
    }

    /// Selection with every observed value checked
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection {
            cities: self.cities.clone(),
            customer_types: self.customer_types.clone(),
            genders: self.genders.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FilterOptions {
        FilterOptions {
            cities: vec!["A".into(), "B".into()],
            customer_types: vec!["Member".into(), "Normal".into()],
            genders: vec!["Female".into(), "Male".into()],
        }
    }

    #[test]
    fn test_default_selection_selects_everything() {
        let opts = options();
        let selection = opts.default_selection();
        for dim in FilterDimension::ALL {
            assert_eq!(selection.values(dim), opts.values(dim));
        }
        assert!(!selection.has_empty_dimension());
    }

    #[test]
    fn test_toggle_removes_then_restores() {
        let selection = options().default_selection();

        let without_a = selection.toggled(FilterDimension::City, "A");
        assert_eq!(without_a.cities, vec!["B".to_string()]);
        assert!(!without_a.is_selected(FilterDimension::City, "A"));

        let restored = without_a.toggled(FilterDimension::City, "A");
        assert!(restored.is_selected(FilterDimension::City, "A"));
        assert_eq!(restored.customer_types, selection.customer_types);
    }

    #[test]
    fn test_empty_dimension_detected() {
        let selection = options()
            .default_selection()
            .with_values(FilterDimension::Gender, vec![]);
        assert!(selection.has_empty_dimension());
    }

    #[test]
    fn test_selection_json_shape() {
        let json = serde_json::to_value(options().default_selection()).unwrap();
        assert_eq!(json["cities"][0], "A");
        assert_eq!(json["customer_types"][1], "Normal");
        assert_eq!(
            serde_json::to_value(FilterDimension::CustomerType).unwrap(),
            "customer_type"
        );
    }
}
