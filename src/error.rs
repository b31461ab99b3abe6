//! Ambient error type for the parts of the crate that have failure modes
//! external to scansion proper — chiefly CLI I/O (§7.1). The analytical
//! surface (`analyze`, `classify`, the NFA search, the merger, the caesura
//! locator) stays infallible, returning plain values or empty collections.

#[derive(Debug, thiserror::Error)]
pub enum HexascanError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
