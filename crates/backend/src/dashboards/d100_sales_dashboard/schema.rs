//! Column schema of the sales sheet.
//!
//! Every column the dashboard reads is named here with the headers it may
//! appear under. The header row is matched once at load time.

use super::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesColumn {
    OrderId,
    City,
    CustomerType,
    Gender,
    ProductLine,
    UnitPrice,
    Quantity,
    TotalPrice,
    Date,
    Time,
    Rating,
}

impl SalesColumn {
    pub const ALL: [SalesColumn; 11] = [
        SalesColumn::OrderId,
        SalesColumn::City,
        SalesColumn::CustomerType,
        SalesColumn::Gender,
        SalesColumn::ProductLine,
        SalesColumn::UnitPrice,
        SalesColumn::Quantity,
        SalesColumn::TotalPrice,
        SalesColumn::Date,
        SalesColumn::Time,
        SalesColumn::Rating,
    ];

    /// Canonical header, used in error messages
    pub fn name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Accepted header texts, canonical first
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            SalesColumn::OrderId => &["订单号", "Invoice ID", "Order ID"],
            SalesColumn::City => &["城市", "City"],
            SalesColumn::CustomerType => &["顾客类型", "Customer type"],
            SalesColumn::Gender => &["性别", "Gender"],
            SalesColumn::ProductLine => &["产品类型", "Product line"],
            SalesColumn::UnitPrice => &["单价", "Unit price"],
            SalesColumn::Quantity => &["数量", "Quantity"],
            SalesColumn::TotalPrice => &["总价", "Total"],
            SalesColumn::Date => &["日期", "Date"],
            SalesColumn::Time => &["时间", "Time"],
            SalesColumn::Rating => &["评分", "Rating"],
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    fn matches(&self, header: &str, key_column: &str) -> bool {
        if *self == SalesColumn::OrderId && header_eq(header, key_column) {
            return true;
        }
        self.aliases().iter().any(|alias| header_eq(header, alias))
    }
}

fn header_eq(header: &str, expected: &str) -> bool {
    normalize_header(header).eq_ignore_ascii_case(expected.trim())
}

fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

/// Position of every schema column in the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [usize; 11],
}

impl ColumnMap {
    /// Matches the header row against the schema; the first matching header wins
    pub fn resolve(header: &[String], key_column: &str) -> Result<Self, LoadError> {
        let mut positions = [0usize; 11];
        for column in SalesColumn::ALL {
            let position = header
                .iter()
                .position(|h| column.matches(h, key_column))
                .ok_or_else(|| LoadError::MissingColumn {
                    column: column.name(),
                })?;
            positions[column.index()] = position;
        }
        Ok(Self { positions })
    }

    pub fn position(&self, column: SalesColumn) -> usize {
        self.positions[column.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_chinese_headers() {
        let row = header(&[
            "订单号", "城市", "顾客类型", "性别", "产品类型", "单价", "数量", "总价", "日期", "时间",
            "评分",
        ]);
        let map = ColumnMap::resolve(&row, "订单号").unwrap();
        assert_eq!(map.position(SalesColumn::OrderId), 0);
        assert_eq!(map.position(SalesColumn::Time), 9);
        assert_eq!(map.position(SalesColumn::Rating), 10);
    }

    #[test]
    fn test_resolves_english_headers_in_any_order() {
        let row = header(&[
            "\u{feff}Invoice ID",
            "Branch",
            "City",
            "Customer type",
            "Gender",
            "Product line",
            "Unit price",
            "Quantity",
            "Tax 5%",
            "Total",
            "Date",
            "Time",
            "Payment",
            "Rating",
        ]);
        let map = ColumnMap::resolve(&row, "订单号").unwrap();
        assert_eq!(map.position(SalesColumn::OrderId), 0);
        assert_eq!(map.position(SalesColumn::City), 2);
        assert_eq!(map.position(SalesColumn::TotalPrice), 9);
        assert_eq!(map.position(SalesColumn::Rating), 13);
    }

    #[test]
    fn test_custom_key_column() {
        let row = header(&[
            "Receipt", "City", "Customer type", "Gender", "Product line", "Unit price", "Quantity",
            "Total", "Date", "Time", "Rating",
        ]);
        assert!(ColumnMap::resolve(&row, "订单号").is_err());
        let map = ColumnMap::resolve(&row, "receipt").unwrap();
        assert_eq!(map.position(SalesColumn::OrderId), 0);
    }

    #[test]
    fn test_missing_column_is_named() {
        let row = header(&["订单号", "城市"]);
        match ColumnMap::resolve(&row, "订单号") {
            Err(LoadError::MissingColumn { column }) => assert_eq!(column, "顾客类型"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }
}
