//! Champion record as served by the Data Dragon champion list endpoint.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role classification attached to a champion. Closed set; the catalog never
/// carries tags outside it, so an unknown tag is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Fighter,
    Tank,
    Mage,
    Assassin,
    Marksman,
    Support,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 6] = [
        Role::Fighter,
        Role::Tank,
        Role::Mage,
        Role::Assassin,
        Role::Marksman,
        Role::Support,
    ];

    /// Display label (same spelling Data Dragon uses).
    pub fn label(self) -> &'static str {
        match self {
            Role::Fighter => "Fighter",
            Role::Tank => "Tank",
            Role::Mage => "Mage",
            Role::Assassin => "Assassin",
            Role::Marksman => "Marksman",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for role strings outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleParseError(pub String);

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for RoleParseError {}

impl FromStr for Role {
    type Err = RoleParseError;

    /// Case-insensitive; accepts CLI-style lowercase (`marksman`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fighter" => Ok(Role::Fighter),
            "tank" => Ok(Role::Tank),
            "mage" => Ok(Role::Mage),
            "assassin" => Ok(Role::Assassin),
            "marksman" => Ok(Role::Marksman),
            "support" => Ok(Role::Support),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Difficulty/attack/defense/magic summary (0-10 scale).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionInfo {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}

/// Image reference into the Data Dragon sprite atlas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionImage {
    /// Standalone square image file name (e.g. `Aatrox.png`).
    pub full: String,
    /// Sprite sheet file name.
    pub sprite: String,
    pub group: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// One champion entry from the catalog. Field set mirrors the provider's
/// wire shape so pass-through responses re-serialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionRecord {
    /// Stable identifier, unique within a catalog snapshot (e.g. `Aatrox`).
    pub id: String,
    /// Numeric key as a string (e.g. `"266"`).
    pub key: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    pub tags: Vec<Role>,
    /// Resource bar type (`Mana`, `Energy`, `Blood Well`, ...).
    #[serde(default)]
    pub partype: String,
    pub info: ChampionInfo,
    pub image: ChampionImage,
    /// Numeric stat bundle; the provider adds stats over time, so the set of
    /// names is open.
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
    /// Data-version the record was published under.
    pub version: String,
}

impl ChampionRecord {
    /// Whether any of this champion's tags is in `roles`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.tags.iter().any(|tag| roles.contains(tag))
    }

    /// Square icon URL on the CDN, versioned like the record itself.
    pub fn icon_url(&self, cdn_base: &str) -> String {
        format!(
            "{}/cdn/{}/img/champion/{}",
            cdn_base.trim_end_matches('/'),
            self.version,
            self.image.full
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_serde() {
        let json = serde_json::to_string(&Role::Marksman).expect("encode");
        assert_eq!(json, "\"Marksman\"");
        let back: Role = serde_json::from_str(&json).expect("decode");
        assert_eq!(back, Role::Marksman);
    }

    #[test]
    fn unknown_role_fails_decode() {
        let result: Result<Role, _> = serde_json::from_str("\"Jungler\"");
        assert!(result.is_err());
    }

    #[test]
    fn role_from_str_is_case_insensitive() {
        assert_eq!("MARKSMAN".parse::<Role>(), Ok(Role::Marksman));
        assert_eq!(" support ".parse::<Role>(), Ok(Role::Support));
        assert!("jungler".parse::<Role>().is_err());
    }

    #[test]
    fn icon_url_uses_record_version() {
        let record = ChampionRecord {
            id: "Aatrox".to_string(),
            key: "266".to_string(),
            name: "Aatrox".to_string(),
            title: "the Darkin Blade".to_string(),
            blurb: String::new(),
            tags: vec![Role::Fighter, Role::Tank],
            partype: "Blood Well".to_string(),
            info: ChampionInfo::default(),
            image: ChampionImage {
                full: "Aatrox.png".to_string(),
                ..ChampionImage::default()
            },
            stats: BTreeMap::new(),
            version: "13.11.1".to_string(),
        };
        assert_eq!(
            record.icon_url("https://ddragon.leagueoflegends.com/"),
            "https://ddragon.leagueoflegends.com/cdn/13.11.1/img/champion/Aatrox.png"
        );
    }
}
