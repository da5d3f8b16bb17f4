//! Record loading: CSV rows → deduplicated relationship records.
//!
//! Required columns are `c_name`, `sub_name` and `relation`; `category` and
//! `definition` are optional. Other columns are ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use capmap_core::RelationshipRecord;

use crate::error::{LoadError, Result};

pub const SOURCE_COLUMN: &str = "c_name";
pub const TARGET_COLUMN: &str = "sub_name";
pub const RELATION_COLUMN: &str = "relation";
pub const CATEGORY_COLUMN: &str = "category";
pub const DEFINITION_COLUMN: &str = "definition";

/// Records after exact-duplicate removal, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub records: Vec<RelationshipRecord>,
    /// Rows dropped because an identical row came before them.
    pub duplicate_rows: usize,
}

impl RecordSet {
    /// Deduplicate raw rows, keeping the first of each identical group.
    pub fn from_rows(rows: Vec<RelationshipRecord>) -> Self {
        let total = rows.len();
        let mut seen = HashSet::with_capacity(total);
        let records: Vec<RelationshipRecord> =
            rows.into_iter().filter(|r| seen.insert(r.clone())).collect();

        Self {
            duplicate_rows: total - records.len(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load and deduplicate records from a CSV file on disk.
pub fn load_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io(e),
    })?;

    let set = read_records(file)?;
    tracing::info!(
        path = %path.display(),
        records = set.len(),
        duplicates = set.duplicate_rows,
        "Loaded relationship records"
    );
    Ok(set)
}

/// Load and deduplicate records from any CSV source with a header row.
///
/// Every row must have as many fields as the header; a ragged row fails
/// the whole load with [`LoadError::Csv`].
pub fn read_records<R: Read>(source: R) -> Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        rows.push(columns.record(&row));
    }

    Ok(RecordSet::from_rows(rows))
}

/// Positions of the known columns within the header row.
struct ColumnIndex {
    source: usize,
    target: usize,
    relation: usize,
    category: Option<usize>,
    definition: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        let required = |name: &str| {
            position(name).ok_or_else(|| LoadError::MissingColumn {
                column: name.to_string(),
            })
        };

        Ok(Self {
            source: required(SOURCE_COLUMN)?,
            target: required(TARGET_COLUMN)?,
            relation: required(RELATION_COLUMN)?,
            category: position(CATEGORY_COLUMN),
            definition: position(DEFINITION_COLUMN),
        })
    }

    // Rows are length-checked by the reader, so every index resolves.
    fn record(&self, row: &csv::StringRecord) -> RelationshipRecord {
        let text = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        let optional = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        RelationshipRecord {
            source_name: text(self.source),
            target_name: text(self.target),
            category: optional(self.category),
            definition: optional(self.definition),
            relation_label: text(self.relation),
        }
    }
}
