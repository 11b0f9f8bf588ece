//! Property tests for lookup index construction.

use std::path::Path;

use proptest::prelude::*;

use slugmap::{normalize, EntityKind, IndexBuilder, MemoryFs};

/// (canonical slug, optional display name) pairs with unique slugs
fn records() -> impl Strategy<Value = Vec<(String, Option<String>)>> {
    proptest::collection::btree_map(
        "[a-z0-9]{1,6}(-[a-z0-9]{1,6}){0,2}",
        proptest::option::of("[A-Za-z0-9 .,&'-]{0,24}"),
        0..12,
    )
    .prop_map(|m| m.into_iter().collect())
}

fn store(records: &[(String, Option<String>)]) -> MemoryFs {
    records.iter().fold(MemoryFs::new(), |fs, (slug, name)| {
        let content = match name {
            Some(name) => serde_json::json!({ "name": name }).to_string(),
            None => "not json".to_string(),
        };
        fs.with_file(format!("data/firms/{slug}.json"), &content)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every file's canonical slug is a key, even for broken records.
    #[test]
    fn property_every_slug_is_a_key(records in records()) {
        let report = IndexBuilder::new(store(&records)).build_dir(EntityKind::Firms, Path::new("data/firms"));

        for (slug, _) in &records {
            prop_assert!(report.index.contains_key(slug), "missing identity key {}", slug);
        }
        prop_assert_eq!(report.records(), records.len());
    }

    /// PROPERTY: every string name is a key pointing at some listed entity.
    #[test]
    fn property_names_resolve_to_listed_entities(records in records()) {
        let report = IndexBuilder::new(store(&records)).build_dir(EntityKind::Firms, Path::new("data/firms"));

        for (_, name) in &records {
            let Some(name) = name else { continue };
            let alias = normalize(name);
            let target = report.index.get(&alias);
            prop_assert!(target.is_some(), "missing alias {}", alias);
            let target = target.unwrap();
            prop_assert!(records.iter().any(|(slug, _)| slug == target));
        }
    }

    /// PROPERTY: the last record claiming a name keeps it unless a later identity reclaims it.
    #[test]
    fn property_last_listed_alias_wins(records in records()) {
        let report = IndexBuilder::new(store(&records)).build_dir(EntityKind::Firms, Path::new("data/firms"));

        for (i, (slug, name)) in records.iter().enumerate() {
            let Some(name) = name else { continue };
            let alias = normalize(name);
            let overwritten_later = records[i + 1..].iter().any(|(later_slug, later_name)| {
                *later_slug == alias
                    || later_name.as_deref().map(normalize).as_deref() == Some(alias.as_str())
            });
            if !overwritten_later {
                prop_assert_eq!(report.index.get(&alias), Some(slug.as_str()));
            }
        }
    }

    /// PROPERTY: every value in the index is a listed canonical slug.
    #[test]
    fn property_values_are_canonical_slugs(records in records()) {
        let report = IndexBuilder::new(store(&records)).build_dir(EntityKind::Firms, Path::new("data/firms"));

        for (_, target) in report.index.iter() {
            prop_assert!(records.iter().any(|(slug, _)| slug == target));
        }
    }
}
