//! Top-level `analyze()` (§4.7): orchestrates C1–C6 over a single line.

use unicode_normalization::UnicodeNormalization;

use crate::caesura::split_at_caesura;
use crate::cluster::{build_clusters, build_glyphs};
use crate::merge::merge;
use crate::nfa::{min_cost_scansions, search, Scansion};
use crate::prosody::{analyze_clusters, PrelimAnalysis};

/// One scansion of a line, paired with the line partitioned at its primary
/// caesura: `[before, after]` when a caesura was found, or `[whole_line]`
/// when none was (§4.7 step 5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub scansion: Scansion,
    pub parts: Vec<String>,
}

/// Scan a line of Greek text and return every minimum-cost scansion, each
/// paired with the line split at its caesura. Returns an empty vector if
/// the line has no accepting scansion (§7) — unscannable input is not an
/// error, only an empty result.
pub fn analyze(line: &str) -> Vec<ScannedLine> {
    let normalized: String = line.nfd().collect::<String>().to_lowercase();
    let clusters = build_clusters(build_glyphs(&normalized));
    let analysis: PrelimAnalysis = analyze_clusters(clusters);

    let tags: Vec<_> = analysis.iter().filter_map(|(_, tag)| *tag).collect();
    let results = search(&tags);
    let best = min_cost_scansions(&results);

    best.into_iter()
        .filter_map(|scansion| {
            let merged = merge(&scansion, &analysis)?;
            let parts = split_at_caesura(&merged);
            Some(ScannedLine { scansion, parts })
        })
        .collect()
}
