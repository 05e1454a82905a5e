//! Roster CSV I/O: read the input roster (local path or URL), identify the
//! player-name column, and write the roster back out joined with extracted
//! career stats.

use std::path::Path;

use anyhow::Context;
use tracing::warn;

use crate::batch::PlayerRecord;
use crate::error::Result;


/// Header names recognized as the player-name column, case-insensitive, in
/// preference order.
const NAME_HEADERS: [&str; 2] = ["Player", "Name"];

/// The input roster, parsed. Column order and cell text are preserved
/// verbatim for the output join.
#[derive(Debug, Clone)]
pub struct Roster {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Index of the column holding player names.
    pub name_col: usize,
}

impl Roster {
    /// Load a roster from a local path or an `http(s)://` URL.
    ///
    /// `insecure` disables TLS certificate verification for the download
    /// only; it never affects the scrape requests.
    pub async fn load(source: &str, insecure: bool) -> Result<Self> {
        let bytes = load_bytes(source, insecure).await?;
        Self::parse(&bytes)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(bytes);
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|rec| rec.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, _>>()?;

        let name_col = NAME_HEADERS
            .iter()
            .find_map(|wanted| headers.iter().position(|h| h.eq_ignore_ascii_case(wanted)))
            .unwrap_or_else(|| {
                warn!(
                    header = headers.first().map(String::as_str).unwrap_or(""),
                    "no Player/Name column, falling back to the first column"
                );
                0
            });

        Ok(Self {
            headers,
            rows,
            name_col,
        })
    }

    /// Player names in roster order, duplicates included (deduplication is
    /// the orchestrator's concern).
    pub fn player_names(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.get(self.name_col).cloned())
            .collect()
    }

    /// Write the roster joined with `records` to `path`.
    ///
    /// Rows are deduplicated by player name (first occurrence kept). Stat
    /// columns are the union across records in first-seen order; a stat
    /// column colliding with an input column overwrites that cell instead of
    /// duplicating the column. Players with no record keep empty stat cells.
    pub fn write_augmented(&self, records: &[PlayerRecord], path: &Path) -> Result<()> {
        let stat_columns = stat_column_union(records);
        let extra: Vec<&String> = stat_columns
            .iter()
            .filter(|c| !self.headers.contains(c))
            .collect();

        let mut writer = csv::Writer::from_path(path)?;
        let mut out_headers = self.headers.clone();
        out_headers.extend(extra.iter().map(|c| c.to_string()));
        writer.write_record(&out_headers)?;

        let mut seen = std::collections::HashSet::new();
        for row in &self.rows {
            let name = row.get(self.name_col).cloned().unwrap_or_default();
            if !seen.insert(name.to_ascii_lowercase()) {
                continue;
            }
            let record = records
                .iter()
                .find(|r| r.player_name.eq_ignore_ascii_case(&name));

            let mut out_row = row.clone();
            out_row.resize(self.headers.len(), String::new());
            if let Some(record) = record {
                // Overwrite colliding input columns in place.
                for (i, header) in self.headers.iter().enumerate() {
                    if i != self.name_col && stat_columns.contains(header) {
                        out_row[i] = stat_cell(record, header);
                    }
                }
            }
            for column in &extra {
                out_row.push(record.map(|r| stat_cell(r, column)).unwrap_or_default());
            }
            writer.write_record(&out_row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

async fn load_bytes(source: &str, insecure: bool) -> anyhow::Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(insecure)
            .build()
            .context("failed to build roster download client")?;
        let res = client
            .get(source)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .with_context(|| format!("failed to download roster from {source}"))?;
        let bytes = res
            .bytes()
            .await
            .context("failed to read roster response body")?;
        Ok(bytes.to_vec())
    } else {
        std::fs::read(source).with_context(|| format!("failed to read roster file {source}"))
    }
}

/// Union of stat names across records, in first-seen order.
fn stat_column_union(records: &[PlayerRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for (name, _) in &record.fields {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
    }
    columns
}

/// Cell text for one stat: the number, or empty for a missing/absent value.
fn stat_cell(record: &PlayerRecord, column: &str) -> String {
    record
        .fields
        .iter()
        .find(|(name, _)| name == column)
        .and_then(|(_, value)| *value)
        .map(|v| v.to_string())
        .unwrap_or_default()
}
