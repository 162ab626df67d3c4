// Copyright 2026 Artlink Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catalog table I/O: CSV in, CSV-plus-URL-column out.
//!
//! Only the `title/en` column is interpreted; every other column passes
//! through byte-for-byte. Read and write failures are the only fatal errors
//! in the system.

use anyhow::{Context, Result};
use std::path::Path;

/// Column holding the matching title.
pub const TITLE_COLUMN: &str = "title/en";

/// Column appended to the output table.
pub const URL_COLUMN: &str = "google_arts_url";

/// A catalog table held in memory, columns preserved verbatim.
#[derive(Debug)]
pub struct Catalog {
    headers: csv::StringRecord,
    rows: Vec<csv::StringRecord>,
    title_index: usize,
}

impl Catalog {
    /// Read a catalog CSV. The `title/en` column must exist.
    pub fn read(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open catalog {}", path.display()))?;

        let headers = reader
            .headers()
            .context("failed to read catalog headers")?
            .clone();
        let title_index = headers
            .iter()
            .position(|h| h == TITLE_COLUMN)
            .with_context(|| format!("catalog has no `{TITLE_COLUMN}` column"))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record.context("failed to read catalog row")?);
        }

        Ok(Self {
            headers,
            rows,
            title_index,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-row matching titles, in table order; empty cells are absent.
    pub fn titles(&self) -> Vec<Option<String>> {
        self.rows
            .iter()
            .map(|row| match row.get(self.title_index) {
                None | Some("") => None,
                Some(title) => Some(title.to_string()),
            })
            .collect()
    }

    /// Write the table with the `google_arts_url` column appended, one
    /// result per row in order. Absent results become empty cells.
    pub fn write_annotated(&self, path: &Path, urls: &[Option<String>]) -> Result<()> {
        debug_assert_eq!(urls.len(), self.rows.len());

        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create output {}", path.display()))?;

        let mut headers = self.headers.clone();
        headers.push_field(URL_COLUMN);
        writer
            .write_record(&headers)
            .context("failed to write output headers")?;

        for (row, url) in self.rows.iter().zip(urls) {
            let mut out = row.clone();
            out.push_field(url.as_deref().unwrap_or(""));
            writer
                .write_record(&out)
                .context("failed to write output row")?;
        }

        writer.flush().context("failed to flush output")?;
        Ok(())
    }
}
