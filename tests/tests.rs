use hexascan::analyze;
use hexascan::betacode::betacode_to_unicode;
use quickcheck::quickcheck;

/// More informative than a simple `assert_eq!` macro.
macro_rules! assert_eq_dbg {
    ($result:expr, $expected:expr, $input:expr) => {
        assert_eq!(
            $result,
            $expected,
            "\nMismatch for: '{}'\n'{:?}'",
            $input,
            $input
                .chars()
                .map(|ch| format!("U+{:04X}", ch as u32))
                .collect::<Vec<_>>(),
        );
    };
}

macro_rules! mktest_scansion {
    ($group_name:ident, $([$input:expr, $expected:expr]),* $(,)?) => {
        #[test]
        fn $group_name() {
            let test_cases = vec![
                $(
                    ($input, $expected),
                )*
            ];

            for (input, expected) in test_cases {
                let lines = analyze(input);
                let scansions: Vec<&str> =
                    lines.iter().map(|l| l.scansion.as_str()).collect();
                assert!(
                    scansions.contains(&expected),
                    "\nLine: '{}'\nExpected one scansion to be: '{}'\nGot: {:?}",
                    input,
                    expected,
                    scansions,
                );
            }
        }
    };
}

// Il. 1.1 — the canonical textbook opening line, dactylic with a spondaic
// close in the sixth foot.
mktest_scansion!(
    scansion_iliad_opening_lines,
    [
        "μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος",
        "+--|+--|+--|+--|+--|++"
    ],
);

#[test]
fn scansion_iliad_1_2_has_an_accepting_reading() {
    let lines = analyze("οὐλομένην, ἣ μυρί᾽ Ἀχαιοῖς ἄλγε᾽ ἔθηκε");
    assert!(!lines.is_empty(), "expected at least one accepting scansion");
    for line in &lines {
        assert_eq!(line.scansion.matches('|').count(), 5);
    }
}

#[test]
fn scansion_no_vowels_returns_no_results() {
    assert!(analyze("").is_empty());
    assert!(analyze(". , ;").is_empty());
}

#[test]
fn scansion_single_vowel_line_has_no_accepting_path() {
    assert!(analyze("α").is_empty());
}

#[test]
fn scansion_short_forced_long_still_scans_at_a_cost() {
    // too few long/heavy syllables to fill six feet without reading at
    // least one short as long via the fallback path.
    let lines = analyze("α α α α α α α α α α α α");
    assert!(!lines.is_empty());
}

#[test]
fn scansion_every_result_has_exactly_five_foot_boundaries() {
    let lines = analyze("μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος");
    assert!(!lines.is_empty());
    for line in &lines {
        assert_eq!(line.scansion.matches('|').count(), 5);
    }
}

#[test]
fn scansion_parts_split_into_at_most_two_pieces() {
    let lines = analyze("μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος");
    assert!(!lines.is_empty());
    for line in &lines {
        assert!(!line.parts.is_empty() && line.parts.len() <= 2);
    }
}

#[test]
fn scansion_is_deterministic() {
    let line = "μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος";
    assert_eq!(analyze(line), analyze(line));
}

#[test]
fn scansion_all_returned_results_are_distinct() {
    let lines = analyze("μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος");
    let mut scansions: Vec<&str> = lines.iter().map(|l| l.scansion.as_str()).collect();
    let before = scansions.len();
    scansions.sort_unstable();
    scansions.dedup();
    assert_eq!(before, scansions.len());
}

#[test]
fn scansion_leading_and_trailing_whitespace_is_ignored() {
    let bare = analyze("μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος");
    let padded = analyze("  μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος  ");
    assert_eq_dbg!(bare, padded, "  μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος  ");
}

#[test]
fn scansion_medial_punctuation_does_not_block_scansion() {
    let lines = analyze("οὐλομένην, ἣ μυρί᾽ Ἀχαιοῖς ἄλγε᾽ ἔθηκε");
    assert!(!lines.is_empty());
}

// Betacode feeding straight into analyze(): the converted text should scan
// exactly as the native-Unicode spelling does.
#[test]
fn betacode_then_analyze_matches_native_unicode() {
    let native = analyze("μῆνιν ἄειδε θεὰ");
    let converted = betacode_to_unicode("MH=NIN A)/EIDE QEA\\");
    let from_betacode = analyze(&converted);
    assert_eq!(
        native.iter().map(|l| &l.scansion).collect::<Vec<_>>(),
        from_betacode.iter().map(|l| &l.scansion).collect::<Vec<_>>(),
    );
}

const HEXAMETER_LONG_VOWELS: &[char] = &['η', 'ω'];
const HEXAMETER_SHORT_VOWELS: &[char] = &['ε', 'ο'];
const HEXAMETER_CONSONANTS: &[char] =
    &['μ', 'ν', 'τ', 'δ', 'σ', 'ρ', 'λ', 'κ', 'θ', 'χ', 'π', 'φ', 'β', 'γ'];

/// A pseudo-random sequence of Greek letters shaped loosely like a verse
/// line: a run of letters with the occasional space. Not guaranteed to be
/// scannable — `analyze` must simply never panic on it and must return
/// results that respect the five-boundary invariant when it does accept.
#[derive(Debug, Clone)]
struct GreekLine(String);

impl quickcheck::Arbitrary for GreekLine {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut all_letters: Vec<char> = Vec::new();
        all_letters.extend_from_slice(HEXAMETER_LONG_VOWELS);
        all_letters.extend_from_slice(HEXAMETER_SHORT_VOWELS);
        all_letters.extend_from_slice(HEXAMETER_CONSONANTS);

        let wlen = usize::arbitrary(g) % 40 + 1;
        let mut line = String::new();
        for i in 0..wlen {
            if i > 0 && i % 6 == 0 {
                line.push(' ');
            }
            let ch = g.choose(&all_letters).unwrap();
            line.push(*ch);
        }
        Self(line)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        Box::new(chars.shrink().map(|x| Self(x.into_iter().collect::<String>())))
    }
}

quickcheck! {
    fn analyze_never_panics_and_is_pure(line: GreekLine) -> bool {
        let a = analyze(&line.0);
        let b = analyze(&line.0);
        a == b
    }
}

quickcheck! {
    fn analyze_results_always_have_five_foot_boundaries(line: GreekLine) -> bool {
        analyze(&line.0).iter().all(|l| l.scansion.matches('|').count() == 5)
    }
}
