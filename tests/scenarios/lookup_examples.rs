//! Scenario: the worked lookup examples
//!
//! Each test builds a real on-disk entity directory and checks the index and
//! resolver behaviour for one example.

use std::fs;
use std::path::Path;

use slugmap::{build_lookup, normalize, DataDirIndexSource, EntityKind, SlugResolver};
use tempfile::TempDir;

fn entity_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn data_dir(kind: EntityKind, files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().unwrap();
    let dir = root.path().join(kind.dir_name());
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
    root
}

/// SCENARIO: a name that normalizes to its own file stem
#[test]
fn scenario_identity_and_name_collapse() {
    let dir = entity_dir(&[("acme-corp.json", r#"{"name": "Acme Corp."}"#)]);

    let index = build_lookup(EntityKind::Clients, dir.path());

    assert_eq!(index.len(), 1);
    assert_eq!(index.get("acme-corp"), Some("acme-corp"));
}

/// SCENARIO: punctuation in the display name yields a distinct alias
#[test]
fn scenario_punctuated_name_alias() {
    let dir = entity_dir(&[(
        "us-chamber-of-commerce.json",
        r#"{"name": "U.S. Chamber of Commerce"}"#,
    )]);

    let index = build_lookup(EntityKind::Clients, dir.path());

    assert_eq!(
        index.get("u-s-chamber-of-commerce"),
        Some("us-chamber-of-commerce")
    );
    assert_eq!(
        index.get("us-chamber-of-commerce"),
        Some("us-chamber-of-commerce")
    );
}

/// SCENARIO: a broken record keeps its identity entry and the build goes on
#[test]
fn scenario_invalid_json_keeps_identity() {
    let dir = entity_dir(&[
        ("broken-llc.json", "{ definitely not json"),
        ("akin-gump.json", r#"{"name": "Akin Gump"}"#),
    ]);

    let index = build_lookup(EntityKind::Firms, dir.path());

    assert_eq!(index.get("broken-llc"), Some("broken-llc"));
    assert_eq!(index.get("akin-gump"), Some("akin-gump"));
}

/// SCENARIO: two names collide; the winner depends on listing order
#[test]
fn scenario_collision_has_one_of_two_winners() {
    let dir = entity_dir(&[
        ("foo-inc.json", r#"{"name": "Foo, Inc."}"#),
        ("foo-inc-2.json", r#"{"name": "Foo Inc"}"#),
    ]);

    let index = build_lookup(EntityKind::Clients, dir.path());

    let winner = index.get("foo-inc").expect("alias must exist");
    assert!(
        winner == "foo-inc" || winner == "foo-inc-2",
        "unexpected winner {winner}"
    );
    assert_eq!(index.get("foo-inc-2"), Some("foo-inc-2"));
}

/// SCENARIO: a canonical slug resolves to itself
#[test]
fn scenario_canonical_slug_is_unchanged() {
    let root = data_dir(
        EntityKind::Lobbyists,
        &[("jane-doe.json", r#"{"name": "Jane Q. Doe"}"#)],
    );
    let resolver = SlugResolver::new(DataDirIndexSource::new(root.path()));

    assert_eq!(resolver.resolve_lobbyist_slug("jane-doe"), "jane-doe");
    assert_eq!(resolver.resolve_lobbyist_slug("Jane Q. Doe"), "jane-doe");
}

/// SCENARIO: an unknown name passes through normalized, even with no such file
#[test]
fn scenario_unknown_name_passes_through() {
    let root = data_dir(
        EntityKind::Firms,
        &[("akin-gump.json", r#"{"name": "Akin Gump"}"#)],
    );
    let resolver = SlugResolver::new(DataDirIndexSource::new(root.path()));

    let name = "Brownstein Hyatt Farber Schreck";
    assert_eq!(resolver.resolve_firm_slug(name), normalize(name));
    assert!(!root.path().join("firms/brownstein-hyatt-farber-schreck.json").exists());
}

/// SCENARIO: the resolver loads each kind once and never sees later records
#[test]
fn scenario_resolver_cache_is_process_lifetime() {
    let root = data_dir(EntityKind::Clients, &[]);
    let resolver = SlugResolver::new(DataDirIndexSource::new(root.path()));

    assert_eq!(resolver.resolve_client_slug("Acme Corp."), "acme-corp");
    assert!(resolver.is_loaded(EntityKind::Clients));
    assert!(!resolver.is_loaded(EntityKind::Firms));

    fs::write(
        root.path().join("clients/acme-2.json"),
        r#"{"name": "Acme Corp."}"#,
    )
    .unwrap();

    assert_eq!(resolver.resolve_client_slug("Acme Corp."), "acme-corp");
    let fresh = SlugResolver::new(DataDirIndexSource::new(root.path()));
    assert_eq!(fresh.resolve_client_slug("Acme Corp."), "acme-2");
}

/// SCENARIO: a missing directory is an empty index
#[test]
fn scenario_missing_directory_is_empty() {
    let index = build_lookup(EntityKind::Clients, Path::new("/nonexistent/slugmap/clients"));
    assert!(index.is_empty());
}
