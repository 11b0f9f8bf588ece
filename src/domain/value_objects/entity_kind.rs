//! Entity kind value object - which record directory an index covers

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Entity type with its own independent lookup index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Organizations that hire lobbyists
    Clients,
    /// Registrant lobbying firms
    Firms,
    /// Individual lobbyists
    Lobbyists,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Clients,
        EntityKind::Firms,
        EntityKind::Lobbyists,
    ];

    /// Directory name under the data root
    pub fn dir_name(&self) -> &'static str {
        match self {
            EntityKind::Clients => "clients",
            EntityKind::Firms => "firms",
            EntityKind::Lobbyists => "lobbyists",
        }
    }

    /// File name of the serialized lookup index, written next to `dir_name()`
    pub fn lookup_file_name(&self) -> String {
        format!("{}-lookup.json", self.dir_name())
    }

    /// Singular label for human output
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Clients => "client",
            EntityKind::Firms => "firm",
            EntityKind::Lobbyists => "lobbyist",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clients" | "client" => Ok(EntityKind::Clients),
            "firms" | "firm" | "registrants" => Ok(EntityKind::Firms),
            "lobbyists" | "lobbyist" => Ok(EntityKind::Lobbyists),
            other => Err(format!("unknown entity kind '{}'", other)),
        }
    }
}
