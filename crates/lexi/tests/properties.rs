//! Property tests for the token stream invariants.

use lexi::{fold_case, tokenize, SpecialTerms, Tokenizer};
use proptest::prelude::*;

/// Folded input with every whitespace character removed.
fn folded_without_whitespace(text: &str) -> String {
    fold_case(text)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

proptest! {
    #[test]
    fn tokens_rebuild_input_without_whitespace(text in any::<String>()) {
        let tokens = tokenize(&text, None);
        prop_assert_eq!(tokens.concat(), folded_without_whitespace(&text));
    }

    #[test]
    fn tokens_never_empty_or_whitespace(text in any::<String>()) {
        for token in tokenize(&text, None) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn spans_advance_and_gaps_are_whitespace(text in "\\PC{0,64}") {
        let tokenizer = Tokenizer::new(&text, None);
        let folded = tokenizer.source().as_str().to_owned();
        let mut last_end = 0;
        for (span, token) in tokenizer.spanned() {
            prop_assert!(span.start >= last_end);
            prop_assert!(span.end > span.start);
            prop_assert!(folded[last_end..span.start].chars().all(char::is_whitespace));
            prop_assert_eq!(&folded[span.range()], token.as_str());
            last_end = span.end;
        }
        prop_assert!(folded[last_end..].chars().all(char::is_whitespace));
    }

    #[test]
    fn case_does_not_change_tokens(text in "[a-zA-Z0-9 ,.!?;:()\t\n-]{0,48}") {
        let lower = tokenize(&text.to_lowercase(), None);
        prop_assert_eq!(&tokenize(&text, None), &lower);
        prop_assert_eq!(&tokenize(&text.to_uppercase(), None), &lower);
    }

    #[test]
    fn special_term_is_emitted_whole(
        prefix in "[a-z ]{0,8}",
        term in "[a-z0-9#.+!]{2,6}",
        suffix in "[ ,]{1}[a-z]{0,6}",
    ) {
        let text = format!("{prefix} {} {suffix}", term.to_uppercase());
        let tokens = tokenize(&text, Some(SpecialTerms::new([term.as_str()])));
        prop_assert!(tokens.contains(&term), "{:?} missing from {:?}", term, tokens);
    }

    #[test]
    fn special_terms_keep_rebuild_invariant(
        text in "[a-c#. ]{0,32}",
        terms in proptest::collection::vec("[a-c#.]{1,3}", 0..6),
    ) {
        let tokens = tokenize(&text, Some(SpecialTerms::new(&terms)));
        prop_assert_eq!(tokens.concat(), folded_without_whitespace(&text));
    }
}
