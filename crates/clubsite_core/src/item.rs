use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical datasets the site renders; each has its own field conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Events,
    PanelMembers,
    HallOfFame,
    Contacts,
    Sponsors,
    Collaborations,
    CollaboratedClubs,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 7] = [
        DatasetKind::Events,
        DatasetKind::PanelMembers,
        DatasetKind::HallOfFame,
        DatasetKind::Contacts,
        DatasetKind::Sponsors,
        DatasetKind::Collaborations,
        DatasetKind::CollaboratedClubs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Events => "events",
            DatasetKind::PanelMembers => "panel_members",
            DatasetKind::HallOfFame => "hall_of_fame",
            DatasetKind::Contacts => "contacts",
            DatasetKind::Sponsors => "sponsors",
            DatasetKind::Collaborations => "collaborations",
            DatasetKind::CollaboratedClubs => "collaborated_clubs",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("unknown dataset: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.facebook.is_none()
            && self.linkedin.is_none()
            && self.github.is_none()
            && self.email.is_none()
            && self.instagram.is_none()
    }
}

/// A normalized record ready for presentation.
///
/// Also the unit persisted by the presentation cache, hence the serde derives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: String,
    pub name: String,
    /// Role, designation or service line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "SocialLinks::is_empty")]
    pub links: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub sort_key: i64,
    /// Set when the name is a placeholder synthesized for a slot that had no
    /// name of its own.
    #[serde(default)]
    pub generic: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl DisplayItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, sort_key: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: None,
            image: None,
            description: None,
            links: SocialLinks::default(),
            category: None,
            sort_key,
            generic: false,
            details: BTreeMap::new(),
        }
    }

    pub(crate) fn insert_detail(&mut self, key: &str, value: Option<String>) {
        if let Some(value) = value {
            self.details.insert(key.to_string(), value);
        }
    }
}
