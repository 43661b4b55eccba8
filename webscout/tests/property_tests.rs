//! Property-based tests using proptest for extractor robustness.

mod text_extraction_properties {
    use proptest::prelude::*;
    use webscout::extract::text;

    /// Strategy for inputs large enough to cross the truncation cap
    fn repeated_fragment_strategy() -> impl Strategy<Value = String> {
        ("[a-z<>/ ]{1,10}", 1usize..4000).prop_map(|(fragment, count)| fragment.repeat(count))
    }

    proptest! {
        #[test]
        fn test_extraction_never_panics(input in ".{0,500}") {
            let _ = text::extract(&input);
        }

        #[test]
        fn test_output_length_is_bounded(input in repeated_fragment_strategy()) {
            let output = text::extract(&input);
            prop_assert!(output.chars().count() <= text::MAX_TEXT_LENGTH + 3);
        }

        #[test]
        fn test_script_bodies_never_survive(body in "[a-z0-9 ]{0,60}") {
            let html = format!("<p>keep</p><script>ZQXV{body}ZQXV</script>");
            let output = text::extract(&html);
            prop_assert!(!output.contains("ZQXV"));
            prop_assert!(output.contains("keep"));
        }

        #[test]
        fn test_style_bodies_never_survive(body in "[a-z0-9:;{} ]{0,60}") {
            let html = format!("<style>ZQXV{body}ZQXV</style><p>keep</p>");
            let output = text::extract(&html);
            prop_assert!(!output.contains("ZQXV"));
        }

        #[test]
        fn test_comment_bodies_never_survive(body in "[a-z0-9 ]{0,60}") {
            let html = format!("<p>keep</p><!--ZQXV{body}ZQXV-->");
            let output = text::extract(&html);
            prop_assert!(!output.contains("ZQXV"));
        }

        #[test]
        fn test_output_has_no_whitespace_runs(input in "[a-z \t\n]{0,300}") {
            let output = text::extract(&input);
            prop_assert!(!output.contains("  "));
            prop_assert!(!output.starts_with(' '));
            prop_assert!(!output.ends_with(' '));
        }
    }
}

mod metadata_extraction_properties {
    use proptest::prelude::*;
    use webscout::extract::metadata;

    proptest! {
        #[test]
        fn test_extraction_never_panics(input in ".{0,500}") {
            let _ = metadata::extract(&input);
        }

        #[test]
        fn test_simple_titles_round_trip(title in "[a-zA-Z0-9 ]{1,50}") {
            let html = format!("<title>{title}</title>");
            let output = metadata::extract(&html);
            prop_assert_eq!(output, format!("title: {}", title.trim()));
        }
    }
}

mod truncation_properties {
    use proptest::prelude::*;
    use webscout::truncate_chars;

    proptest! {
        #[test]
        fn test_truncation_respects_character_cap(
            input in "\\PC{0,200}",
            cap in 0usize..250
        ) {
            let cut = truncate_chars(&input, cap);
            prop_assert!(cut.chars().count() <= cap);
        }

        #[test]
        fn test_truncation_yields_a_prefix(input in "\\PC{0,200}", cap in 0usize..250) {
            let cut = truncate_chars(&input, cap);
            prop_assert!(input.starts_with(cut));
        }
    }
}
