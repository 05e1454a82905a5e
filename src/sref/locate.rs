//! Table location: find the stats table in a fetched page body.
//!
//! The site renders the authoritative season-by-season table inside an HTML
//! comment for most pages (a deliberate obstacle to casual scraping), so a
//! miss on the live DOM is followed by a second pass that unwraps the
//! comment under the table's `div_<id>` container and re-parses it. Both
//! paths yield the same [`RawTable`] shape.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::sref::table::RawTable;

#[cfg(test)]
mod tests;

/// Find the table carrying `table_id`, checking the live DOM first and the
/// comment-embedded variant second.
pub fn locate(body: &str, table_id: &str) -> Result<RawTable> {
    let table_sel = table_selector(table_id)?;
    let doc = Html::parse_document(body);

    if let Some(table) = doc.select(&table_sel).next() {
        return Ok(extract_table(table)?);
    }

    // Second pass: the table may be serialized inside a comment under its
    // `div_<id>` wrapper.
    let div_sel = parse_selector(&format!(r#"div[id="div_{table_id}"]"#))?;
    if let Some(div) = doc.select(&div_sel).next() {
        for node in div.descendants() {
            let Some(comment) = node.value().as_comment() else {
                continue;
            };
            let fragment = Html::parse_document(uncomment(comment));
            if let Some(table) = fragment.select(&table_sel).next() {
                return Ok(extract_table(table)?);
            }
        }
    }

    Err(ScrapeError::TableNotFound {
        table_id: table_id.to_string(),
    })
}

/// Comment node text from `scraper` has the `<!--`/`-->` delimiters already
/// removed; strip them here too in case the comment body embeds stray ones.
fn uncomment(comment: &str) -> &str {
    comment
        .trim()
        .trim_start_matches("<!--")
        .trim_end_matches("-->")
}

fn table_selector(table_id: &str) -> Result<Selector> {
    parse_selector(&format!(r#"table[id="{table_id}"]"#))
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        message: format!("{selector}: {e}"),
    })
}

/// Lift header and data rows out of a `<table>` element.
///
/// The header row is the last `<thead>` row: the site stacks a spanning
/// group-label row above the real per-column header. Data rows come from
/// `<tbody>` and `<tfoot>` in document order; career totals live in the
/// footer on some page variants.
fn extract_table(table: ElementRef<'_>) -> Result<RawTable> {
    let head_sel = parse_selector("thead > tr")?;
    let body_sel = parse_selector("tbody > tr, tfoot > tr")?;
    let cell_sel = parse_selector("th, td")?;

    let headers = table
        .select(&head_sel)
        .last()
        .map(|tr| row_cells(tr, &cell_sel))
        .unwrap_or_default();

    let rows = table
        .select(&body_sel)
        .map(|tr| row_cells(tr, &cell_sel))
        .collect();

    Ok(RawTable { headers, rows })
}

fn row_cells(tr: ElementRef<'_>, cell_sel: &Selector) -> Vec<String> {
    tr.select(cell_sel).map(cell_text).collect()
}

/// Concatenated text content with internal whitespace collapsed.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
