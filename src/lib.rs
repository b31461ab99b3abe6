//! `hexascan`: scans lines of ancient Greek dactylic hexameter verse and
//! produces a prosodic analysis — a cost-ranked set of scansions and the
//! location of the primary caesura (§1).
//!
//! The public surface is a single pure function, [`analyze`], plus the
//! standalone [`betacode`] transliteration module. Everything else (C1–C6)
//! is exposed for testing and composition but is not required to call
//! `analyze`.

mod accents;
mod analyze;
mod caesura;
mod chars;
mod cluster;
mod merge;
mod nfa;
mod prosody;

pub mod betacode;
pub mod constants;
pub mod error;

pub use accents::Diacritic;
pub use analyze::{analyze, ScannedLine};
pub use caesura::{locate_caesura, split_at_caesura};
pub use chars::{classify, CharClass};
pub use cluster::{build_clusters, build_glyphs, Cluster, Glyph};
pub use error::HexascanError;
pub use merge::{merge, MergedElement};
pub use nfa::{min_cost_scansions, search, Scansion};
pub use prosody::{analyze_clusters, NaturalLength, PrelimAnalysis, SyllableTag};
