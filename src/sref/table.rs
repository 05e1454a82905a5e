//! Tabular forms of a located stats table.


/// A table as lifted straight out of the markup: one header row plus data
/// rows of cell text. Whether it came from live markup or from inside an
/// HTML comment is irrelevant from here on.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A [`RawTable`] with header cells cleaned of footnote markers and encoding
/// artifacts. Column order is the source order; names are expected unique
/// in the source format and are not deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl NormalizedTable {
    /// Index of the first column matching `name`, case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }
}

/// Clean each header cell: strip the configured junk characters, then trim.
pub fn normalize(raw: RawTable, header_junk: &[char]) -> NormalizedTable {
    let columns = raw
        .headers
        .iter()
        .map(|h| clean_header(h, header_junk))
        .collect();
    NormalizedTable {
        columns,
        rows: raw.rows,
    }
}

fn clean_header(header: &str, junk: &[char]) -> String {
    header
        .chars()
        .filter(|c| !junk.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
