//! Property-based tests for segmentation
//!
//! Random lexicons over a tiny alphabet make accidental matches, ties and rejected
//! one-letter roots common, which is what these properties need to see.

use proptest::prelude::*;
use rootword::rootword::fragment::FragmentKind;
use rootword::rootword::pattern::{compile_root, compile_suffix, PrefixMatcher, SuffixMatcher};
use rootword::rootword::testing::{analyzer, columns};

/// Root labels: literals, optional single chars, char classes and groups
fn root_label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-d]{1,3}",
        "[a-d]{1,3}/[a-d]",
        "[a-d]{1,3}/[a-d]/[a-d]",
        "[a-d]{1,2}/[a-d]{2}/[a-d]{1,2}",
        ("[a-d]{1,3}", "[a-d]{1,3}").prop_map(|(a, b)| format!("{a}, {b}")),
    ]
}

fn suffix_label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "-[a-d]{1,3}",
        ("[a-d]{1,3}", "[a-d]{1,3}").prop_map(|(a, b)| format!("-{a}, -{b}")),
    ]
}

fn lexicon_strategy(
    labels: impl Strategy<Value = String>,
) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(labels, 0..6).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| (label, format!("meaning {i}")))
            .collect()
    })
}

fn as_rows(rows: &[(String, String)]) -> Vec<(&str, &str)> {
    rows.iter().map(|(l, m)| (l.as_str(), m.as_str())).collect()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_fragments_tile_the_word(
            word in "[a-e]{0,12}",
            root_rows in lexicon_strategy(root_label_strategy()),
            suffix_rows in lexicon_strategy(suffix_label_strategy()),
        ) {
            let analyzer = analyzer(&as_rows(&root_rows), &as_rows(&suffix_rows));
            let fragments = analyzer.analyze(&word);
            let spans = columns(&fragments);

            let mut expected_start = 0;
            for (start, end) in &spans {
                prop_assert_eq!(*start, expected_start, "gap or overlap in {:?}", spans);
                prop_assert!(end > start);
                expected_start = *end;
            }
            prop_assert_eq!(expected_start, word.len());

            for fragment in &fragments {
                prop_assert_eq!(&word[fragment.span()], fragment.text.as_str());
            }
        }

        #[test]
        fn test_tie_sets_are_cohesive(
            word in "[a-e]{0,12}",
            root_rows in lexicon_strategy(root_label_strategy()),
            suffix_rows in lexicon_strategy(suffix_label_strategy()),
        ) {
            let analyzer = analyzer(&as_rows(&root_rows), &as_rows(&suffix_rows));
            let fragments = analyzer.analyze(&word);

            for (i, a) in fragments.iter().enumerate() {
                for b in &fragments[i + 1..] {
                    if a.same_span(b) {
                        prop_assert!(!a.is_filler() && !b.is_filler());
                        prop_assert_eq!(a.kind, b.kind);
                    }
                }
            }
            // Tiling plus ordering leaves no room for a split group, but check it directly.
            for window in fragments.windows(3) {
                let split = window[0].same_span(&window[2]) && !window[0].same_span(&window[1]);
                prop_assert!(!split);
            }
        }

        #[test]
        fn test_short_roots_only_at_start(
            word in "[a-e]{0,12}",
            root_rows in lexicon_strategy(root_label_strategy()),
        ) {
            let analyzer = analyzer(&as_rows(&root_rows), &[]);
            for fragment in analyzer.analyze(&word) {
                if fragment.kind == FragmentKind::Root && fragment.end - fragment.start == 1 {
                    prop_assert_eq!(fragment.start, 0);
                }
            }
        }

        #[test]
        fn test_root_compilation_is_deterministic(
            label in root_label_strategy(),
            text in "[a-d]{0,10}",
        ) {
            let first = compile_root(&label).unwrap();
            let second = compile_root(&label).unwrap();
            for pos in 0..=text.len() {
                prop_assert_eq!(first.match_at(&text, pos), second.match_at(&text, pos));
            }
        }

        #[test]
        fn test_suffix_compilation_is_deterministic(
            label in suffix_label_strategy(),
            text in "[a-d]{0,10}",
        ) {
            let first = compile_suffix(&label).unwrap();
            let second = compile_suffix(&label).unwrap();
            let found = first.find_end_anchored(&text);
            prop_assert_eq!(found.clone(), second.find_end_anchored(&text));
            if let Some(span) = found {
                prop_assert_eq!(span.end, text.len());
            }
        }

        #[test]
        fn test_root_matches_never_empty(
            label in root_label_strategy(),
            text in "[a-d]{0,10}",
        ) {
            let pattern = compile_root(&label).unwrap();
            for pos in 0..=text.len() {
                if let Some(len) = pattern.match_at(&text, pos) {
                    prop_assert!(len > 0);
                    prop_assert!(pos + len <= text.len());
                }
            }
        }
    }
}
