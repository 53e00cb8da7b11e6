use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::collections::HashSet;
use std::path::Path;

use super::error::LoadError;
use super::schema::{ColumnMap, SalesColumn};
use super::table::{SalesTable, TransactionRecord};
use crate::shared::config::DatasetConfig;

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Raw cells of one sheet.
///
/// `first_row` is the 0-based sheet row of `rows[0]`; calamine trims leading
/// empty rows, so it is not always 0.
#[derive(Debug, Clone)]
pub struct Grid {
    pub first_row: usize,
    pub rows: Vec<Vec<Data>>,
}

impl Grid {
    pub fn from_range(range: &Range<Data>) -> Self {
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let first_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let rows = range
            .rows()
            .map(|row| {
                // Keep sheet column positions stable when column A is empty
                let mut cells = vec![Data::Empty; first_col];
                cells.extend_from_slice(row);
                cells
            })
            .collect();
        Self { first_row, rows }
    }
}

/// Load the sales table described by `config` from `path`.
///
/// Workbooks are read with calamine; a `.csv` export of the sheet is read
/// directly and the sheet name is ignored.
pub fn load_sales_table(path: &Path, config: &DatasetConfig) -> Result<SalesTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::ResourceMissing {
            path: path.to_path_buf(),
        });
    }

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let grid = if is_csv {
        read_csv_grid(path)?
    } else {
        read_workbook_grid(path, &config.sheet)?
    };

    tracing::debug!(
        "Read {} raw rows from {} (first sheet row {})",
        grid.rows.len(),
        path.display(),
        grid.first_row + 1
    );

    parse_grid(&grid, config.skip_rows, &config.key_column)
}

fn read_workbook_grid(path: &Path, sheet: &str) -> Result<Grid, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(LoadError::SheetMissing {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| LoadError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(Grid::from_range(&range))
}

fn read_csv_grid(path: &Path) -> Result<Grid, LoadError> {
    let unreadable = |e: csv::Error| LoadError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(unreadable)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        Data::Empty
                    } else {
                        Data::String(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Grid { first_row: 0, rows })
}

/// Turn raw cells into typed records.
///
/// `skip_rows` rows above the header are ignored; every non-empty row after
/// the header becomes one record.
pub fn parse_grid(grid: &Grid, skip_rows: usize, key_column: &str) -> Result<SalesTable, LoadError> {
    let header_index = skip_rows.saturating_sub(grid.first_row);
    let header_row = grid
        .rows
        .get(header_index)
        .ok_or_else(|| LoadError::MissingHeader {
            row: skip_rows + 1,
            rows: grid.first_row + grid.rows.len(),
        })?;

    let header: Vec<String> = header_row
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();
    let columns = ColumnMap::resolve(&header, key_column)?;

    let mut records = Vec::new();
    let mut seen_keys = HashSet::new();

    for (offset, row) in grid.rows.iter().enumerate().skip(header_index + 1) {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        // 1-based, as shown by spreadsheet tools
        let sheet_row = grid.first_row + offset + 1;
        let record = parse_record(row, &columns, sheet_row)?;

        if !seen_keys.insert(record.order_id.clone()) {
            return Err(LoadError::DuplicateKey {
                row: sheet_row,
                key: record.order_id,
            });
        }
        records.push(record);
    }

    Ok(SalesTable::new(records))
}

fn parse_record(
    row: &[Data],
    columns: &ColumnMap,
    sheet_row: usize,
) -> Result<TransactionRecord, LoadError> {
    let cell = |column: SalesColumn| row.get(columns.position(column)).unwrap_or(&Data::Empty);

    let time = parse_time(cell(SalesColumn::Time), sheet_row)?;
    let rating = parse_number(cell(SalesColumn::Rating), SalesColumn::Rating, sheet_row)?;
    if !(0.0..=10.0).contains(&rating) {
        return Err(invalid(cell(SalesColumn::Rating), SalesColumn::Rating, sheet_row));
    }

    Ok(TransactionRecord {
        order_id: parse_text(cell(SalesColumn::OrderId), SalesColumn::OrderId, sheet_row)?,
        city: parse_text(cell(SalesColumn::City), SalesColumn::City, sheet_row)?,
        customer_type: parse_text(
            cell(SalesColumn::CustomerType),
            SalesColumn::CustomerType,
            sheet_row,
        )?,
        gender: parse_text(cell(SalesColumn::Gender), SalesColumn::Gender, sheet_row)?,
        product_line: parse_text(
            cell(SalesColumn::ProductLine),
            SalesColumn::ProductLine,
            sheet_row,
        )?,
        unit_price: parse_number(cell(SalesColumn::UnitPrice), SalesColumn::UnitPrice, sheet_row)?,
        quantity: parse_integer(cell(SalesColumn::Quantity), SalesColumn::Quantity, sheet_row)?,
        total_price: parse_number(
            cell(SalesColumn::TotalPrice),
            SalesColumn::TotalPrice,
            sheet_row,
        )?,
        date: parse_date(cell(SalesColumn::Date), sheet_row)?,
        hour: time.hour(),
        time,
        rating,
    })
}

fn invalid(cell: &Data, column: SalesColumn, sheet_row: usize) -> LoadError {
    LoadError::InvalidValue {
        row: sheet_row,
        column: column.name(),
        value: cell_text(cell).unwrap_or_default(),
    }
}

/// Display text of a cell, `None` for empty cells
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            Some(s.trim().to_string())
        }
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
                Some(format!("{:.0}", f))
            } else {
                Some(f.to_string())
            }
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => Some(dt.to_string()),
        Data::Error(e) => Some(format!("#ERROR:{:?}", e)),
    }
}

fn parse_text(cell: &Data, column: SalesColumn, sheet_row: usize) -> Result<String, LoadError> {
    match cell {
        Data::Error(_) => Err(invalid(cell, column, sheet_row)),
        _ => cell_text(cell)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| invalid(cell, column, sheet_row)),
    }
}

fn parse_number(cell: &Data, column: SalesColumn, sheet_row: usize) -> Result<f64, LoadError> {
    let value = match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(cell, column, sheet_row))
}

fn parse_integer(cell: &Data, column: SalesColumn, sheet_row: usize) -> Result<i64, LoadError> {
    let value = match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    value.ok_or_else(|| invalid(cell, column, sheet_row))
}

/// Text must be `HH:MM:SS`. Native time cells are day fractions (xlsx, xls)
/// or ISO 8601 durations such as `PT13H08M00S` (ods)
fn parse_time(cell: &Data, sheet_row: usize) -> Result<NaiveTime, LoadError> {
    let malformed = || LoadError::MalformedTime {
        row: sheet_row,
        value: cell_text(cell).unwrap_or_default(),
    };

    match cell {
        Data::String(s) | Data::DateTimeIso(s) => {
            NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).map_err(|_| malformed())
        }
        Data::DurationIso(s) => time_from_iso_duration(s.trim()).ok_or_else(malformed),
        Data::DateTime(dt) => time_from_day_fraction(dt.as_f64()).ok_or_else(malformed),
        Data::Float(f) if (0.0..1.0).contains(f) => {
            time_from_day_fraction(*f).ok_or_else(malformed)
        }
        _ => Err(malformed()),
    }
}

fn time_from_day_fraction(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let seconds = (serial.fract() * SECONDS_PER_DAY).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}

fn time_from_iso_duration(value: &str) -> Option<NaiveTime> {
    let mut rest = value.strip_prefix("PT")?;
    let mut seconds = 0.0;
    let mut seen = false;

    while !rest.is_empty() {
        let end = rest.find(|c: char| c.is_ascii_alphabetic())?;
        let amount: f64 = rest[..end].parse().ok()?;
        let unit = match &rest[end..=end] {
            "H" => 3_600.0,
            "M" => 60.0,
            "S" => 1.0,
            _ => return None,
        };
        seconds += amount * unit;
        seen = true;
        rest = &rest[end + 1..];
    }

    if !seen || !(0.0..SECONDS_PER_DAY).contains(&seconds) {
        return None;
    }
    NaiveTime::from_num_seconds_from_midnight_opt(seconds.round() as u32 % 86_400, 0)
}

fn parse_date(cell: &Data, sheet_row: usize) -> Result<NaiveDate, LoadError> {
    let parsed = match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
        Data::String(s) => {
            let s = s.trim();
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        }
        _ => None,
    };
    parsed.ok_or_else(|| invalid(cell, SalesColumn::Date, sheet_row))
}
