use super::*;

#[test]
fn blank_spec_matches_fresh_spec() {
    assert_eq!(FilterSpec::blank(), &FilterSpec::new());
}

#[test]
fn deep_copy_of_blank_is_mutable() {
    let mut copy = FilterSpec::blank().deep_copy();
    copy.add(PatternKind::Include, "*.c", MatchFlags::NONE);
    assert!(copy.has(KindMask::ALL));
    assert!(!FilterSpec::blank().has(KindMask::ALL));
}

#[test]
fn filespec_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FilterSpec<'static>>();
    assert_send_sync::<Pattern<'static>>();
    assert_send_sync::<FilterError>();
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn path_char() -> impl Strategy<Value = char> {
        prop_oneof![
            Just('a'),
            Just('b'),
            Just('c'),
            Just('.'),
            Just('_'),
            Just('/'),
        ]
    }

    fn pattern_char() -> impl Strategy<Value = char> {
        prop_oneof![
            Just('a'),
            Just('b'),
            Just('.'),
            Just('/'),
            Just('*'),
            Just('?'),
        ]
    }

    fn path() -> impl Strategy<Value = String> {
        proptest::collection::vec(path_char(), 0..16).prop_map(|chars| chars.into_iter().collect())
    }

    fn pattern() -> impl Strategy<Value = String> {
        proptest::collection::vec(pattern_char(), 1..10)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn match_flags() -> impl Strategy<Value = MatchFlags> {
        (0u32..64).prop_map(MatchFlags::from_bits_truncate)
    }

    fn spec_flags() -> impl Strategy<Value = SpecFlags> {
        (0u32..8).prop_map(SpecFlags::from_bits_truncate)
    }

    fn spec() -> impl Strategy<Value = FilterSpec<'static>> {
        (
            proptest::collection::vec(pattern(), 0..3),
            proptest::collection::vec(pattern(), 0..3),
            proptest::collection::vec(pattern(), 0..3),
            spec_flags(),
        )
            .prop_map(|(includes, excludes, ignores, flags)| {
                let mut spec = FilterSpec::new();
                spec.add_patterns(PatternKind::Include, includes, MatchFlags::NONE);
                spec.add_patterns(PatternKind::Exclude, excludes, MatchFlags::NONE);
                spec.add_patterns(PatternKind::Ignore, ignores, MatchFlags::NONE);
                spec.set_flags(flags);
                spec
            })
    }

    proptest! {
        #[test]
        fn match_path_agrees_with_classification(
            spec in spec(),
            path in path(),
            flags in match_flags()
        ) {
            let result = spec.should_include(&path, flags);
            prop_assert_eq!(spec.match_path(&path, flags), result.is_accepted());
            prop_assert_eq!(
                result.is_accepted(),
                matches!(result, MatchResult::Included | MatchResult::Implied)
            );
        }

        #[test]
        fn disabled_set_behaves_as_empty(
            spec in spec(),
            path in path(),
            flags in match_flags()
        ) {
            let disabled = spec.flags();
            let mut stripped = spec.deep_copy();
            if disabled.contains(SpecFlags::NO_INCLUDES) {
                stripped.clear(PatternKind::Include.into());
            }
            if disabled.contains(SpecFlags::NO_EXCLUDES) {
                stripped.clear(PatternKind::Exclude.into());
            }
            if disabled.contains(SpecFlags::NO_IGNORES) {
                stripped.clear(PatternKind::Ignore.into());
            }
            stripped.set_flags(SpecFlags::NONE);

            prop_assert_eq!(
                spec.should_include(&path, flags),
                stripped.should_include(&path, flags)
            );
        }

        #[test]
        fn exclude_match_always_wins(spec in spec(), path in path(), flags in match_flags()) {
            let mut spec = spec;
            spec.modify_flags(SpecFlags::NONE, SpecFlags::NO_EXCLUDES);
            spec.add(PatternKind::Exclude, "**", MatchFlags::NONE);
            prop_assume!(match_pattern("**", &path, flags));

            prop_assert_eq!(spec.should_include(&path, flags), MatchResult::Excluded);
            prop_assert!(!spec.match_path(&path, flags));
        }

        #[test]
        fn separators_are_interchangeable(
            pattern in pattern(),
            path in path(),
            flags in match_flags()
        ) {
            let backslashed_path = path.replace('/', "\\");
            let backslashed_pattern = pattern.replace('/', "\\");
            let expected = match_pattern(&pattern, &path, flags);

            prop_assert_eq!(match_pattern(&pattern, &backslashed_path, flags), expected);
            prop_assert_eq!(match_pattern(&backslashed_pattern, &path, flags), expected);
        }

        #[test]
        fn add_then_clear_round_trips_presence(text in pattern(), raw in 0u8..4) {
            let kind = PatternKind::try_from(raw).unwrap();
            let mut spec = FilterSpec::new();
            spec.add(kind, &text, MatchFlags::NONE);
            prop_assert!(spec.has(kind.into()));
            spec.clear(kind.into());
            prop_assert!(!spec.has(kind.into()));
        }
    }
}
