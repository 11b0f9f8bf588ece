//! Test fixtures - reusable entity records.

/// A client whose display name differs from its file stem
pub const CHAMBER_RECORD: &str = r#"{
  "name": "U.S. Chamber of Commerce",
  "state": "DC",
  "filings": 412
}"#;

/// A firm record with punctuation-heavy naming
pub const AKIN_GUMP_RECORD: &str = r#"{
  "name": "Akin Gump Strauss Hauer & Feld LLP"
}"#;

/// A lobbyist record
pub const JANE_DOE_RECORD: &str = r#"{"name": "Jane Q. Doe", "covered_positions": []}"#;

/// Not JSON at all
pub const BROKEN_RECORD: &str = "{ this is not json";

/// Valid JSON without a usable name
pub const NAMELESS_RECORD: &str = r#"{"id": 17}"#;
