//! Prosodic analysis (C3): assigns each vowel cluster a preliminary
//! syllable-length tag, per §4.3.

use crate::chars::CharClass;
use crate::cluster::Cluster;
use crate::constants::{LONG_CONSONANTS, RHO, SYNIZESIS_CANDIDATES, VOWEL_NATURAL_LENGTH};

/// Natural length of a single base vowel, before any positional rule
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalLength {
    Short,
    Long,
    Indeterminate,
}

/// One of the six syllable-length classifications a vowel cluster can carry
/// (§3). `SKIPPED`/`FOOT` from the data model are output-only markers and
/// appear as plain `.`/`|` characters in a [`crate::nfa::Scansion`] string
/// rather than as variants here — nothing in the prosodic analyzer or the
/// NFA's input alphabet ever needs them as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllableTag {
    Long,
    Short,
    Indeterminate,
    LongCorreption,
    IndeterminateCorreption,
    ShortSynizesis,
}

/// A cluster paired with its preliminary tag — `None` for any non-vowel
/// cluster (§3 `PrelimAnalysis`).
pub type PrelimAnalysis = Vec<(Cluster, Option<SyllableTag>)>;

/// Run the prosodic analyzer over an ordered cluster sequence (§4.3).
pub fn analyze_clusters(clusters: Vec<Cluster>) -> PrelimAnalysis {
    let tags: Vec<Option<SyllableTag>> =
        (0..clusters.len()).map(|i| metrical_length(&clusters, i)).collect();
    clusters.into_iter().zip(tags).collect()
}

fn metrical_length(clusters: &[Cluster], i: usize) -> Option<SyllableTag> {
    let cluster = &clusters[i];
    if cluster.class() != CharClass::Vowel {
        return None;
    }

    // Natural length: diphthongs are always long.
    let mut tag = if cluster.base_letter_count() > 1 {
        SyllableTag::Long
    } else {
        match VOWEL_NATURAL_LENGTH.get(&cluster.glyphs()[0].base()) {
            Some(NaturalLength::Short) => SyllableTag::Short,
            Some(NaturalLength::Long) => SyllableTag::Long,
            _ => SyllableTag::Indeterminate,
        }
    };

    // Circumflex is always on a long.
    if cluster.has_circumflex() {
        tag = SyllableTag::Long;
    }

    // Position: two or more consonant code points before the next vowel.
    if followed_by_multiple_consonants(clusters, i) {
        tag = SyllableTag::Long;
    }

    // Correption: a word boundary then a vowel shortens a long/indeterminate.
    if followed_by_vowel_in_next_word(clusters, i) {
        tag = match tag {
            SyllableTag::Long => SyllableTag::LongCorreption,
            SyllableTag::Indeterminate => SyllableTag::IndeterminateCorreption,
            other => other,
        };
    }

    // Synizesis overrides any of the above (last write wins).
    if is_synizesis_candidate(cluster) && followed_by_vowel_in_same_word(clusters, i) {
        tag = SyllableTag::ShortSynizesis;
    }

    Some(tag)
}

fn is_synizesis_candidate(cluster: &Cluster) -> bool {
    SYNIZESIS_CANDIDATES.contains(&cluster.text().as_str())
}

/// §4.3: scan forward, skipping `Other` clusters, stopping at the first
/// vowel. A rho counts only when it is the first consonant encountered in
/// this scan; once some other consonant has already been tallied, a
/// following rho is skipped. Preserved exactly as specified, imperfections
/// and all (§9).
fn followed_by_multiple_consonants(clusters: &[Cluster], i: usize) -> bool {
    let mut count = 0usize;
    for c in &clusters[i + 1..] {
        match c.class() {
            CharClass::Vowel => return false,
            CharClass::Consonant => {
                for ch in c.glyphs().iter().map(|g| g.base()) {
                    if LONG_CONSONANTS.contains(&ch) {
                        count += 2;
                    } else if count > 0 && ch == RHO {
                        // rho-initial-of-remainder consonant clusters often
                        // fail to make position; deliberately not counted.
                    } else {
                        count += 1;
                    }
                }
                if count > 1 {
                    return true;
                }
            }
            CharClass::Diacritical | CharClass::Other => {}
        }
    }
    false
}

fn followed_by_vowel_in_next_word(clusters: &[Cluster], i: usize) -> bool {
    if i + 2 >= clusters.len() {
        return false;
    }
    clusters[i + 1].class() == CharClass::Other && clusters[i + 2].class() == CharClass::Vowel
}

fn followed_by_vowel_in_same_word(clusters: &[Cluster], i: usize) -> bool {
    if i + 1 >= clusters.len() {
        return false;
    }
    clusters[i + 1].class() == CharClass::Vowel
}
