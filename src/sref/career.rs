//! Career row extraction: isolate the "Career" totals row and coerce its
//! stat cells to numbers.

use crate::error::{Result, ScrapeError};
use crate::sref::table::NormalizedTable;


/// Marker the season column carries on the totals row.
pub const CAREER_MARKER: &str = "Career";

/// The two per-variant names the season column appears under.
const SEASON_COLUMNS: [&str; 2] = ["Season", "year_id"];

/// Identifying columns dropped before numeric coercion (the season column
/// itself is dropped separately).
const IDENTIFIER_COLUMNS: [&str; 6] = ["Team", "Conf", "Conference", "Class", "Pos", "Awards"];

/// The career totals of one player: stat name to value, in table column
/// order. Cells that fail numeric coercion are kept as `None` rather than
/// failing the extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerRow {
    pub fields: Vec<(String, Option<f64>)>,
}

/// Pull the row whose season cell equals [`CAREER_MARKER`] and coerce every
/// non-identifier column to `f64`.
///
/// At most one such row exists in the source format; if the markup ever
/// carried more, the first wins.
pub fn extract(table: &NormalizedTable, table_id: &str) -> Result<CareerRow> {
    let season_idx = SEASON_COLUMNS
        .iter()
        .find_map(|name| table.column_index(name))
        .ok_or_else(|| ScrapeError::RowNotFound {
            table_id: table_id.to_string(),
        })?;

    let row = table
        .rows
        .iter()
        .find(|row| row.get(season_idx).map(String::as_str) == Some(CAREER_MARKER))
        .ok_or_else(|| ScrapeError::RowNotFound {
            table_id: table_id.to_string(),
        })?;

    let fields = table
        .columns
        .iter()
        .enumerate()
        .filter(|(i, name)| *i != season_idx && !is_identifier_column(name))
        .map(|(i, name)| {
            let value = row.get(i).and_then(|cell| parse_stat(cell));
            (name.clone(), value)
        })
        .collect();

    Ok(CareerRow { fields })
}

fn is_identifier_column(name: &str) -> bool {
    IDENTIFIER_COLUMNS
        .iter()
        .any(|id| id.eq_ignore_ascii_case(name))
}

/// The site comma-groups large totals ("1,152"); drop the separators before
/// parsing.
fn parse_stat(cell: &str) -> Option<f64> {
    cell.trim().replace(',', "").parse::<f64>().ok()
}
