//! BLAKE3 fingerprint of the rendered tables.
//!
//! Hashes the canonical JSON of the network payload and table rows, so two
//! runs over the same input can be compared by a single hex string.

use serde::Serialize;

use crate::error::Result;
use crate::network::NetworkPayload;
use crate::table::TableRow;

#[derive(Serialize)]
struct HashableReport<'a> {
    nodes: &'a [crate::network::NetworkNode],
    edges: &'a [crate::network::NetworkEdge],
    rows: &'a [TableRow],
}

/// Hex-encoded BLAKE3 hash of the payload and table rows.
pub fn compute_fingerprint(payload: &NetworkPayload, rows: &[TableRow]) -> Result<String> {
    let hashable = HashableReport {
        nodes: &payload.nodes,
        edges: &payload.edges,
        rows,
    };

    let json = serde_json::to_vec(&hashable)?;
    Ok(blake3::hash(&json).to_hex().to_string())
}
