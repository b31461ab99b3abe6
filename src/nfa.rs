//! Weighted scansion NFA (C4): searches all legal hexameter readings of a
//! tag sequence and returns every accepting path with its cost, per §4.4.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::prosody::SyllableTag;

/// A string over `{+, -, ., |}` describing one metrical reading of a line
/// (§3). Exactly one of `{+, -, .}` per input tag consumed, plus five `|`
/// foot-boundary markers for an accepting path.
pub type Scansion = String;

const LONG: &str = "+";
const SHORT: &str = "-";
const SKIPPED: &str = ".";
const LONG_FOOT: &str = "+|";
const SHORT_FOOT: &str = "-|";

/// Cost of reading a short syllable as long — kept arbitrarily high so a
/// path using it is only chosen once no ordinary reading accepts (§4.4).
const FALLBACK_COST: u32 = 15;
/// Cost of entering or completing a synizesis fusion.
const SYNIZESIS_COST: u32 = 1;
/// Cost of taking a `LONG_CORREPTION` syllable along a short-reading branch.
const CORREPTION_COST: u32 = 1;

const LONG_SYLLABLES: &[SyllableTag] = &[
    SyllableTag::Long,
    SyllableTag::Indeterminate,
    SyllableTag::LongCorreption,
    SyllableTag::IndeterminateCorreption,
];
const SHORT_SYLLABLES: &[SyllableTag] = &[
    SyllableTag::Short,
    SyllableTag::Indeterminate,
    SyllableTag::IndeterminateCorreption,
    SyllableTag::ShortSynizesis,
];
const CORREPTED_SYLLABLES: &[SyllableTag] = &[SyllableTag::LongCorreption];
const CORREPTED_SYNIZESIS: &[SyllableTag] =
    &[SyllableTag::LongCorreption, SyllableTag::IndeterminateCorreption];
const SYNIZESIS_SYLLABLES: &[SyllableTag] = &[SyllableTag::ShortSynizesis];
const ALL_SYLLABLES: &[SyllableTag] = &[
    SyllableTag::Long,
    SyllableTag::Short,
    SyllableTag::Indeterminate,
    SyllableTag::LongCorreption,
    SyllableTag::IndeterminateCorreption,
    SyllableTag::ShortSynizesis,
];

const START_STATE: u8 = 0;
const ACCEPT_STATE: u8 = 37;

/// `(from_state, accepted_tags, to_state, cost, emitted)`.
type TransitionRow = (u8, &'static [SyllableTag], u8, u32, &'static str);

/// One foot-entry-to-foot-exit subgraph shared by feet 1–5: a spondee
/// (long-long) or dactyl (long-short-short) branch, each with a synizesis
/// variant that fuses a short syllable with the one after it (§4.4).
/// `spondee_cost` is added to both of the foot's long-long completions —
/// zero for feet 1–4, one for foot 5 (the fifth-foot spondee penalty).
#[allow(clippy::too_many_arguments)]
fn normal_foot(
    e: u8,
    a: u8,
    m: u8,
    f: u8,
    sz_long_entry: u8,
    sz_long_exit: u8,
    sz_short_entry: u8,
    sz_short_exit: u8,
    spondee_cost: u32,
) -> Vec<TransitionRow> {
    vec![
        // first syllable of the foot: long, or short read as long (fallback)
        (e, LONG_SYLLABLES, a, 0, LONG),
        (e, SHORT_SYLLABLES, a, FALLBACK_COST, LONG),
        (e, SYNIZESIS_SYLLABLES, sz_long_entry, SYNIZESIS_COST, SKIPPED),
        (sz_long_entry, ALL_SYLLABLES, a, 0, LONG),
        // spondee: long second syllable closes the foot
        (a, LONG_SYLLABLES, f, spondee_cost, LONG_FOOT),
        (a, SHORT_SYLLABLES, f, FALLBACK_COST + spondee_cost, LONG_FOOT),
        (a, SYNIZESIS_SYLLABLES, sz_long_exit, SYNIZESIS_COST, SKIPPED),
        (sz_long_exit, ALL_SYLLABLES, f, spondee_cost, LONG_FOOT),
        // dactyl: short second syllable, correption-eligible
        (a, SHORT_SYLLABLES, m, 0, SHORT),
        (a, CORREPTED_SYLLABLES, m, CORREPTION_COST, SHORT),
        (a, SYNIZESIS_SYLLABLES, sz_short_entry, SYNIZESIS_COST, SKIPPED),
        (sz_short_entry, CORREPTED_SYNIZESIS, m, CORREPTION_COST, SHORT),
        // dactyl: short third syllable closes the foot, correption-eligible
        (m, SHORT_SYLLABLES, f, 0, SHORT_FOOT),
        (m, CORREPTED_SYLLABLES, f, CORREPTION_COST, SHORT_FOOT),
        (m, SYNIZESIS_SYLLABLES, sz_short_exit, SYNIZESIS_COST, SKIPPED),
        (sz_short_exit, CORREPTED_SYNIZESIS, f, CORREPTION_COST, SHORT_FOOT),
    ]
}

/// The sixth foot: long, then any syllable (§4.4). The second syllable is
/// always emitted as `+`, regardless of the consumed tag.
fn terminal_foot(e: u8, a: u8, f: u8, sz_entry: u8, sz_exit: u8) -> Vec<TransitionRow> {
    vec![
        (e, LONG_SYLLABLES, a, 0, LONG),
        (e, SHORT_SYLLABLES, a, FALLBACK_COST, LONG),
        (e, SYNIZESIS_SYLLABLES, sz_entry, SYNIZESIS_COST, SKIPPED),
        (sz_entry, ALL_SYLLABLES, a, 0, LONG),
        (a, ALL_SYLLABLES, f, 0, LONG),
        (a, SYNIZESIS_SYLLABLES, sz_exit, SYNIZESIS_COST, SKIPPED),
        (sz_exit, ALL_SYLLABLES, f, 0, LONG),
    ]
}

/// State assignment for the five normal feet, in order, each a tuple of
/// `(entry, long-branch, short-branch, exit, 4 synizesis states, spondee cost)`.
#[rustfmt::skip]
const NORMAL_FEET: [(u8, u8, u8, u8, u8, u8, u8, u8, u32); 5] = [
    ( 0,  1,  2,  7,  3,  4,  5,  6, 0),
    ( 7,  8,  9, 14, 10, 11, 12, 13, 0),
    (14, 15, 16, 21, 17, 18, 19, 20, 0),
    (21, 22, 23, 28, 24, 25, 26, 27, 0),
    (28, 29, 30, 35, 31, 32, 33, 34, 1), // fifth foot: spondee cost raised
];

fn build_transition_rows() -> Vec<TransitionRow> {
    let mut rows = Vec::new();
    for &(e, a, m, f, sz1, sz2, sz3, sz4, spondee_cost) in &NORMAL_FEET {
        rows.extend(normal_foot(e, a, m, f, sz1, sz2, sz3, sz4, spondee_cost));
    }
    rows.extend(terminal_foot(35, 36, 37, 38, 39));
    rows
}

type Edge = (u8, u32, &'static str);

static TRANSITIONS: OnceLock<HashMap<(u8, SyllableTag), Vec<Edge>>> = OnceLock::new();

fn transitions() -> &'static HashMap<(u8, SyllableTag), Vec<Edge>> {
    TRANSITIONS.get_or_init(|| {
        let mut map: HashMap<(u8, SyllableTag), Vec<Edge>> = HashMap::new();
        for (from, tags, to, cost, emitted) in build_transition_rows() {
            for &tag in tags {
                map.entry((from, tag)).or_default().push((to, cost, emitted));
            }
        }
        map
    })
}

#[derive(Debug, Clone)]
struct ActivePath {
    state: u8,
    cost: u32,
    emitted: String,
}

/// Run the NFA over a tag sequence and return every accepting path as
/// `(cost, scansion)`, sorted by ascending cost (§4.4 search semantics).
/// Does not filter to the minimum cost — callers needing only the best
/// scansions should apply [`min_cost_scansions`].
pub fn search(tags: &[SyllableTag]) -> Vec<(u32, Scansion)> {
    let table = transitions();
    let mut paths = vec![ActivePath {
        state: START_STATE,
        cost: 0,
        emitted: String::new(),
    }];

    for &tag in tags {
        let mut next = Vec::new();
        for path in &paths {
            if let Some(edges) = table.get(&(path.state, tag)) {
                for &(to_state, edge_cost, emit) in edges {
                    let mut emitted = path.emitted.clone();
                    emitted.push_str(emit);
                    next.push(ActivePath {
                        state: to_state,
                        cost: path.cost + edge_cost,
                        emitted,
                    });
                }
            }
        }
        if next.is_empty() {
            return Vec::new();
        }
        paths = next;
    }

    let mut results: Vec<(u32, Scansion)> = paths
        .into_iter()
        .filter(|p| p.state == ACCEPT_STATE)
        .map(|p| (p.cost, p.emitted))
        .collect();
    results.sort_by_key(|(cost, _)| *cost);
    results
}

/// Keep only the results tied at the minimum cost (§2 data flow, §4.7 step 4).
pub fn min_cost_scansions(results: &[(u32, Scansion)]) -> Vec<Scansion> {
    let Some(&(best_cost, _)) = results.first() else {
        return Vec::new();
    };
    results
        .iter()
        .filter(|(cost, _)| *cost == best_cost)
        .map(|(_, s)| s.clone())
        .collect()
}
