//! Initial state loaded once at startup from a JSON seed file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Alert, Crisis, Donation, Ngo, ResourceNeed, User, VolunteerOpportunity};

use super::state::ReliefState;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Seed file contents. Every key is optional; collections keep file order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seed {
    pub user: Option<User>,
    pub crises: Vec<Crisis>,
    pub resources: Vec<ResourceNeed>,
    pub opportunities: Vec<VolunteerOpportunity>,
    pub donations: Vec<Donation>,
    pub ngos: Vec<Ngo>,
    pub alerts: Vec<Alert>,
}

impl Seed {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn load_from(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json(&content).map_err(|e| SeedError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn into_state(self) -> ReliefState {
        ReliefState {
            user: self.user.unwrap_or_default(),
            section: Default::default(),
            crises: self.crises,
            resources: self.resources,
            opportunities: self.opportunities,
            donations: self.donations,
            ngos: self.ngos,
            alerts: self.alerts,
        }
    }
}
