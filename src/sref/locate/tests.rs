//! Unit tests for table location, live and comment-embedded

use super::*;
use crate::sref::table::normalize;

const TABLE_ID: &str = "rushing_standard";

fn stats_table() -> &'static str {
    r#"<table id="rushing_standard">
  <thead>
    <tr><th></th><th colspan="5">Rushing</th></tr>
    <tr><th>Season</th><th>Team</th><th>Conf</th><th>Class</th><th>Pos</th>
        <th>G</th><th>Att*</th><th>Yds</th><th>Avg</th><th>TD</th><th>Awards</th></tr>
  </thead>
  <tbody>
    <tr><th>2022</th><td>State</td><td>Big 12</td><td>FR</td><td>QB</td>
        <td>12</td><td>101</td><td>512</td><td>5.1</td><td>4</td><td></td></tr>
    <tr><th>2023</th><td>State</td><td>Big 12</td><td>SO</td><td>QB</td>
        <td>13</td><td>120</td><td>640</td><td>5.3</td><td>6</td><td></td></tr>
  </tbody>
  <tfoot>
    <tr><th>Career</th><td>State</td><td></td><td></td><td></td>
        <td>25</td><td>221</td><td>1152</td><td>5.2</td><td>10</td><td></td></tr>
  </tfoot>
</table>"#
}

fn live_page() -> String {
    format!(
        "<html><body><div id=\"div_{TABLE_ID}\">{}</div></body></html>",
        stats_table()
    )
}

fn commented_page() -> String {
    format!(
        "<html><body><div id=\"div_{TABLE_ID}\"><!--\n{}\n--></div></body></html>",
        stats_table()
    )
}

#[test]
fn locates_live_table() {
    let raw = locate(&live_page(), TABLE_ID).unwrap();
    assert_eq!(raw.headers.len(), 11);
    assert_eq!(raw.headers[0], "Season");
    assert_eq!(raw.rows.len(), 3);
}

#[test]
fn locates_comment_embedded_table() {
    let raw = locate(&commented_page(), TABLE_ID).unwrap();
    assert_eq!(raw.headers[0], "Season");
    assert_eq!(raw.rows.len(), 3);
}

#[test]
fn both_paths_yield_identical_tables() {
    let live = locate(&live_page(), TABLE_ID).unwrap();
    let commented = locate(&commented_page(), TABLE_ID).unwrap();
    assert_eq!(live, commented);

    let junk = crate::config::ScrapeConfig::default().header_junk;
    assert_eq!(normalize(live, &junk), normalize(commented, &junk));
}

#[test]
fn skips_spanning_header_row() {
    let raw = locate(&live_page(), TABLE_ID).unwrap();
    assert!(!raw.headers.contains(&"Rushing".to_string()));
}

#[test]
fn footer_rows_are_included() {
    let raw = locate(&live_page(), TABLE_ID).unwrap();
    let last = raw.rows.last().unwrap();
    assert_eq!(last[0], "Career");
}

#[test]
fn missing_table_reports_not_found() {
    let err = locate("<html><body><p>Page Not Found</p></body></html>", TABLE_ID).unwrap_err();
    match err {
        crate::ScrapeError::TableNotFound { table_id } => assert_eq!(table_id, TABLE_ID),
        other => panic!("expected TableNotFound, got {other:?}"),
    }
}

#[test]
fn wrong_table_id_is_not_found() {
    let err = locate(&live_page(), "passing_standard").unwrap_err();
    assert!(matches!(err, crate::ScrapeError::TableNotFound { .. }));
}

#[test]
fn cell_text_is_whitespace_collapsed() {
    let page = r#"<table id="t"><thead><tr><th> A  B </th></tr></thead>
        <tbody><tr><td>
            1
        </td></tr></tbody></table>"#;
    let raw = locate(page, "t").unwrap();
    assert_eq!(raw.headers, vec!["A B"]);
    assert_eq!(raw.rows, vec![vec!["1".to_string()]]);
}
