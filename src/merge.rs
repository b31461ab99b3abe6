//! Scansion merger (C5): aligns a final scansion string with the
//! [`PrelimAnalysis`] cluster sequence that produced it, per §4.5.

use crate::nfa::Scansion;
use crate::prosody::{PrelimAnalysis, SyllableTag};

/// One aligned element of a merged sequence: a cluster's text, its
/// preliminary tag (vowel clusters only), and the final scansion symbol
/// that resulted from it. A foot boundary is represented as an element
/// with empty `cluster_text`, no tag, and `symbol == Some('|')`; a
/// non-vowel cluster carries its text with no tag and no symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedElement {
    pub cluster_text: String,
    pub tag: Option<SyllableTag>,
    pub symbol: Option<char>,
}

impl MergedElement {
    fn boundary() -> Self {
        Self {
            cluster_text: String::new(),
            tag: None,
            symbol: Some('|'),
        }
    }

    fn scanned(cluster_text: String, tag: SyllableTag, symbol: char) -> Self {
        Self {
            cluster_text,
            tag: Some(tag),
            symbol: Some(symbol),
        }
    }

    fn unscanned(cluster_text: String) -> Self {
        Self {
            cluster_text,
            tag: None,
            symbol: None,
        }
    }
}

/// Align `scansion` with `analysis` using two cursors, one over scansion
/// characters and one over clusters (§4.5). Returns `None` on an alignment
/// invariant violation — scansion characters remain unconsumed while a
/// vowel cluster is also unconsumed, or vice versa — which the caller
/// should treat as a fatal internal error surfaced as an empty result
/// (§7).
pub fn merge(scansion: &Scansion, analysis: &PrelimAnalysis) -> Option<Vec<MergedElement>> {
    let scan_chars: Vec<char> = scansion.chars().collect();
    let mut merged = Vec::with_capacity(scan_chars.len() + analysis.len());
    let mut ci = 0usize;
    let mut si = 0usize;

    while ci < analysis.len() || si < scan_chars.len() {
        if si < scan_chars.len() && scan_chars[si] == '|' {
            merged.push(MergedElement::boundary());
            si += 1;
            continue;
        }

        let Some((cluster, tag)) = analysis.get(ci) else {
            // clusters exhausted but a non-`|` scansion char remains.
            return None;
        };

        match tag {
            Some(tag) => {
                let symbol = *scan_chars.get(si)?;
                merged.push(MergedElement::scanned(cluster.text(), *tag, symbol));
                ci += 1;
                si += 1;
            }
            None => {
                merged.push(MergedElement::unscanned(cluster.text()));
                ci += 1;
            }
        }
    }

    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{build_clusters, build_glyphs};
    use crate::prosody::analyze_clusters;

    fn analysis_for(line: &str) -> PrelimAnalysis {
        analyze_clusters(build_clusters(build_glyphs(line)))
    }

    #[test]
    fn test_merge_single_foot_spondee() {
        // "ηω" -> two long vowel clusters, scanned as a closed spondee.
        let analysis = analysis_for("ηω");
        let merged = merge(&"+|".to_string(), &analysis).unwrap();
        assert_eq!(merged.len(), 3); // long, boundary, long
        assert_eq!(merged[0].cluster_text, "η");
        assert_eq!(merged[0].symbol, Some('+'));
        assert_eq!(merged[1].symbol, Some('|'));
        assert_eq!(merged[1].cluster_text, "");
        assert_eq!(merged[2].cluster_text, "ω");
    }

    #[test]
    fn test_merge_passes_through_non_vowel_clusters() {
        // a space between two long vowels should surface untouched.
        let analysis = analysis_for("η ω");
        let merged = merge(&"+|".to_string(), &analysis).unwrap();
        let texts: Vec<&str> = merged.iter().map(|e| e.cluster_text.as_str()).collect();
        assert_eq!(texts, vec!["η", "", " ", "ω"]);
    }

    #[test]
    fn test_merge_detects_unconsumed_vowel() {
        // one fewer scansion char than vowel clusters: invariant violation.
        let analysis = analysis_for("ηω");
        assert!(merge(&"+".to_string(), &analysis).is_none());
    }

    #[test]
    fn test_merge_detects_leftover_scansion_chars() {
        let analysis = analysis_for("η");
        assert!(merge(&"++".to_string(), &analysis).is_none());
    }
}
