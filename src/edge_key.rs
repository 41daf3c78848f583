//! Integer encoding of (edge id, traversal direction) pairs.
//!
//! A directed traversal of an undirected edge is addressed by a single
//! integer key: `key = edge_id * 2 + direction`. Forward traversals get even
//! keys and reverse traversals odd keys, so adjacency structures can index
//! per-traversal arrays directly by key instead of carrying an
//! `(edge_id, direction)` pair.

use std::fmt;

/// Dense, 0-based identifier of an edge within the owning graph.
pub type EdgeId = u32;

/// Integer encoding of an (edge id, traversal direction) pair.
pub type EdgeKey = u32;

/// Largest edge id whose reverse key still fits in [`EdgeKey`].
///
/// `MAX_EDGE_ID * 2 + 1 == EdgeKey::MAX`, so every id up to and including
/// this bound round-trips through both parities without overflow.
pub const MAX_EDGE_ID: EdgeId = (EdgeKey::MAX - 1) / 2;

/// Errors from the validating edge-key constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKeyError {
    /// The edge id exceeds [`MAX_EDGE_ID`] and cannot be encoded.
    InvalidEdgeId(EdgeId),
}

impl fmt::Display for EdgeKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKeyError::InvalidEdgeId(id) => {
                write!(f, "edge id {id} exceeds the maximum encodable id {MAX_EDGE_ID}")
            }
        }
    }
}

impl std::error::Error for EdgeKeyError {}

/// Packs an edge id and a traversal direction into a single key.
///
/// Forward traversals (`reverse == false`) produce even keys, reverse
/// traversals odd keys. Ids above [`MAX_EDGE_ID`] are out of contract; use
/// [`try_create_edge_key`] when the id comes from an untrusted source.
#[inline]
#[must_use]
pub fn create_edge_key(edge_id: EdgeId, reverse: bool) -> EdgeKey {
    debug_assert!(edge_id <= MAX_EDGE_ID, "edge id {edge_id} exceeds MAX_EDGE_ID");
    edge_id * 2 + EdgeKey::from(reverse)
}

/// Validating variant of [`create_edge_key`].
///
/// Identical arithmetic for in-range ids; ids above [`MAX_EDGE_ID`] fail
/// instead of wrapping.
pub fn try_create_edge_key(edge_id: EdgeId, reverse: bool) -> Result<EdgeKey, EdgeKeyError> {
    if edge_id > MAX_EDGE_ID {
        return Err(EdgeKeyError::InvalidEdgeId(edge_id));
    }
    Ok(edge_id * 2 + EdgeKey::from(reverse))
}

/// Recovers the edge id from a key, discarding the direction bit.
///
/// Left inverse of [`create_edge_key`] for both parities.
#[inline]
#[must_use]
pub fn edge_from_edge_key(key: EdgeKey) -> EdgeId {
    key >> 1
}

/// Flips the direction bit of a key, preserving the edge id.
///
/// Applying this twice returns the original key.
#[inline]
#[must_use]
pub fn reverse_edge_key(key: EdgeKey) -> EdgeKey {
    key ^ 1
}
