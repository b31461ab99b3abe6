//! Caesura locator (C6): finds the primary caesura in a merged sequence and
//! splits the line there, per §4.6.

use crate::merge::MergedElement;

/// Find the first word boundary strictly inside the third or later foot
/// that is not itself a foot boundary (§4.6). Returns the index into
/// `merged` of the `Other` cluster containing that boundary, or `None` if
/// no admissible boundary exists.
pub fn locate_caesura(merged: &[MergedElement]) -> Option<usize> {
    let mut foot = 1u32;
    let mut foot_boundary = true;

    for (i, elem) in merged.iter().enumerate() {
        if elem.symbol == Some('|') {
            foot += 1;
            foot_boundary = true;
            continue;
        }
        if elem.symbol.is_some() {
            foot_boundary = false;
        }
        if elem.cluster_text.contains(' ') && foot >= 3 && !foot_boundary {
            return Some(i);
        }
    }
    None
}

/// Split the line at its primary caesura (§4.6). Returns a single-element
/// vector holding the whole reconstructed line when no caesura is found,
/// or a two-element `[before, after]` split otherwise. The cluster at the
/// caesura is partitioned at its first space, with the space itself
/// attached to `before`; a space-free (pure punctuation) cluster attaches
/// entirely to `before`.
pub fn split_at_caesura(merged: &[MergedElement]) -> Vec<String> {
    let whole = || merged.iter().map(|e| e.cluster_text.as_str()).collect();

    let Some(idx) = locate_caesura(merged) else {
        return vec![whole()];
    };

    let before_prefix: String = merged[..idx].iter().map(|e| e.cluster_text.as_str()).collect();
    let caesura_text = merged[idx].cluster_text.as_str();
    let (before_suffix, after_prefix) = match caesura_text.find(' ') {
        Some(pos) => caesura_text.split_at(pos + ' '.len_utf8()),
        None => (caesura_text, ""),
    };

    let mut before = before_prefix;
    before.push_str(before_suffix);

    let mut after = after_prefix.to_string();
    after.extend(merged[idx + 1..].iter().map(|e| e.cluster_text.as_str()));

    vec![before, after]
}
