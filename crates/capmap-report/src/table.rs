//! Searchable, sortable, paged view over node attributes.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use capmap_core::Node;

use crate::error::{ReportError, Result};

/// One table row per node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub category: String,
    pub definition: Option<String>,
    pub degree_centrality: f64,
    pub closeness_centrality: f64,
}

impl From<&Node> for TableRow {
    fn from(node: &Node) -> Self {
        Self {
            name: node.id.clone(),
            category: node.category.clone(),
            definition: node.definition.clone(),
            degree_centrality: node.degree_centrality,
            closeness_centrality: node.closeness_centrality,
        }
    }
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Category,
    Definition,
    DegreeCentrality,
    ClosenessCentrality,
}

impl FromStr for Column {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "definition" => Ok(Self::Definition),
            "degree" | "degree_centrality" => Ok(Self::DegreeCentrality),
            "closeness" | "closeness_centrality" => Ok(Self::ClosenessCentrality),
            _ => Err(ReportError::UnknownColumn {
                column: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// A single page of rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TablePage {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeTable {
    rows: Vec<TableRow>,
    page_size: usize,
}

impl NodeTable {
    /// Rows in node order. A page size of 0 is treated as 1.
    pub fn new(nodes: &[Node], page_size: usize) -> Self {
        Self {
            rows: nodes.iter().map(TableRow::from).collect(),
            page_size: page_size.max(1),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rows whose name, category or definition contains `query`,
    /// case-insensitively. An empty query keeps every row.
    pub fn search(&self, query: &str) -> Self {
        let needle = query.trim().to_lowercase();
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || row.name.to_lowercase().contains(&needle)
                    || row.category.to_lowercase().contains(&needle)
                    || row
                        .definition
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        Self {
            rows,
            page_size: self.page_size,
        }
    }

    /// Stable sort by one column. Missing definitions sort first.
    pub fn sort_by(&mut self, column: Column, order: SortOrder) {
        self.rows.sort_by(|a, b| {
            let ord = compare(a, b, column);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }

    /// Filter, optionally sort, then fetch one 1-based page.
    pub fn query(
        &self,
        search: Option<&str>,
        sort: Option<Column>,
        order: SortOrder,
        page: usize,
    ) -> Result<TablePage> {
        let mut view = match search {
            Some(needle) => self.search(needle),
            None => self.clone(),
        };
        if let Some(column) = sort {
            view.sort_by(column, order);
        }
        view.page(page)
    }

    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// Fetch a 1-based page. Page 1 of an empty table is an empty page.
    pub fn page(&self, page: usize) -> Result<TablePage> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(ReportError::PageOutOfRange { page, total_pages });
        }

        let start = (page - 1) * self.page_size;
        let rows = self
            .rows
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        Ok(TablePage {
            page,
            page_size: self.page_size,
            total_rows: self.rows.len(),
            total_pages,
            rows,
        })
    }
}

fn compare(a: &TableRow, b: &TableRow, column: Column) -> Ordering {
    match column {
        Column::Name => a.name.cmp(&b.name),
        Column::Category => a.category.cmp(&b.category),
        Column::Definition => a.definition.cmp(&b.definition),
        Column::DegreeCentrality => a
            .degree_centrality
            .partial_cmp(&b.degree_centrality)
            .unwrap_or(Ordering::Equal),
        Column::ClosenessCentrality => a
            .closeness_centrality
            .partial_cmp(&b.closeness_centrality)
            .unwrap_or(Ordering::Equal),
    }
}
