//! Data structures exchanged between the Mergington backend and its clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full set of activities, keyed by unique activity name.
pub type Catalog = BTreeMap<String, Activity>;

/// One extracurricular offering.
///
/// The activity's name is not part of the record; it is the key the record is stored under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper used when seeding a catalog.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for participant in participants {
            self.add_participant(participant);
        }
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends `email` unless it is already enrolled. Returns whether it was added.
    pub fn add_participant(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if self.is_enrolled(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes `email`, keeping the order of the remaining participants.
    /// Returns whether it was present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Seats left before `max_participants` is reached, saturating at zero.
    pub fn spots_left(&self) -> u32 {
        let enrolled = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(enrolled)
    }

    /// Capacity is informational only; signups are never refused because of it.
    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

/// Query string accepted by the signup and unregister endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParticipantQuery {
    pub email: String,
}

/// Body returned by successful mutations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
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

/// Body returned by failed requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
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
