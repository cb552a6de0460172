use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Ngo,
    Volunteer,
    Donor,
    Government,
}

impl Role {
    /// Order of the role switcher.
    pub const ALL: [Role; 4] = [Role::Ngo, Role::Volunteer, Role::Donor, Role::Government];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Ngo => "ngo",
            Role::Volunteer => "volunteer",
            Role::Donor => "donor",
            Role::Government => "government",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown role '{}' (expected ngo, volunteer, donor or government)",
            self.0
        )
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ngo" => Ok(Role::Ngo),
            "volunteer" => Ok(Role::Volunteer),
            "donor" => Ok(Role::Donor),
            "government" => Ok(Role::Government),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Navigation sections. Ids match the ones used by role nav items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Dashboard,
    Crises,
    Resources,
    Volunteers,
    Opportunities,
    Donate,
    MyDonations,
    MyActivities,
    Training,
    Impact,
    Coordination,
    Reports,
    Tasks,
    Communications,
    Analytics,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Crises => "crises",
            Section::Resources => "resources",
            Section::Volunteers => "volunteers",
            Section::Opportunities => "opportunities",
            Section::Donate => "donate",
            Section::MyDonations => "my-donations",
            Section::MyActivities => "my-activities",
            Section::Training => "training",
            Section::Impact => "impact",
            Section::Coordination => "coordination",
            Section::Reports => "reports",
            Section::Tasks => "tasks",
            Section::Communications => "communications",
            Section::Analytics => "analytics",
        }
    }
}

/// The person operating the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub verified: bool,
}

impl User {
    /// Organization name when present, otherwise the person's name.
    pub fn affiliation(&self) -> &str {
        self.organization.as_deref().unwrap_or(&self.name)
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: EntityId::from("local"),
            name: "Relief Coordinator".to_string(),
            email: String::new(),
            role: Role::default(),
            organization: None,
            location: String::new(),
            verified: false,
        }
    }
}
