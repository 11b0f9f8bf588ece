//! Property tests for the slug resolver.

use proptest::prelude::*;

use slugmap::{normalize, EntityKind, LookupIndex, SlugResolver};

fn empty_source(_: EntityKind) -> LookupIndex {
    LookupIndex::default()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolving never panics, whatever the input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,256}") {
        let resolver = SlugResolver::new(empty_source);
        for kind in EntityKind::ALL {
            let _ = resolver.resolve(kind, &s);
        }
    }

    /// PROPERTY: with no records, every query passes through normalized.
    #[test]
    fn property_empty_index_passes_through(s in "(?s).{0,128}") {
        let resolver = SlugResolver::new(empty_source);
        let resolution = resolver.resolve_detailed(EntityKind::Clients, &s);
        prop_assert!(!resolution.matched);
        prop_assert_eq!(resolution.slug, normalize(&s));
    }

    /// PROPERTY: with no records, an already-normalized slug comes back unchanged.
    #[test]
    fn property_empty_index_returns_slugs_verbatim(slug in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}") {
        let resolver = SlugResolver::new(empty_source);
        prop_assert_eq!(resolver.resolve_lobbyist_slug(&slug), slug);
    }

    /// PROPERTY: a missing data directory behaves like an empty index.
    #[test]
    fn property_missing_directory_passes_through(s in "[A-Za-z .&-]{0,32}") {
        let source = slugmap::DataDirIndexSource::new("/nonexistent/slugmap/data");
        let resolver = SlugResolver::new(source);
        prop_assert_eq!(resolver.resolve_firm_slug(&s), normalize(&s));
    }
}
