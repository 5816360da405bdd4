//! Data structures exchanged between the backend and its clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::email::Email;

/// One extracurricular offering.
///
/// The activity's name is its key in the [`Catalog`] and is not stored in the
/// record itself. `participants` keeps sign-up order; uniqueness and the
/// capacity bound are upheld by the operations that mutate it, not by the type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<Email>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper to seed an activity with existing participants.
    pub fn with_participants(mut self, participants: impl IntoIterator<Item = Email>) -> Self {
        self.participants.extend(participants);
        self
    }

    pub fn is_registered(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    pub fn add_participant(&mut self, email: Email) {
        self.participants.push(email);
    }

    /// Removes `email`, returning whether it was present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.as_str() != email);
        self.participants.len() != before
    }
}

/// The complete set of activities, keyed and ordered by name.
pub type Catalog = BTreeMap<String, Activity>;

/// Query parameters accepted by the sign-up and unregister endpoints.
///
/// The email is kept as a raw string here: format validation happens after
/// the activity lookup so that an unknown activity is reported first.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation body returned by successful write operations.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &Email, activity: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity}"),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity}"),
        }
    }
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
    pub participant_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}
