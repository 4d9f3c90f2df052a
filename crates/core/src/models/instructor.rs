use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{availability::WeeklyAvailability, swimming::SwimStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub specialties: BTreeSet<SwimStyle>,
    pub availability: WeeklyAvailability,
}

impl Instructor {
    /// True iff every style in `styles` is one this instructor teaches.
    pub fn teaches_all(&self, styles: &BTreeSet<SwimStyle>) -> bool {
        styles.is_subset(&self.specialties)
    }
}

/// A validated instructor that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInstructor {
    pub name: String,
    pub specialties: BTreeSet<SwimStyle>,
    pub availability: WeeklyAvailability,
}

impl NewInstructor {
    pub fn with_id(self, id: Uuid) -> Instructor {
        Instructor {
            id,
            name: self.name,
            specialties: self.specialties,
            availability: self.availability,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInstructorRequest {
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Leading days of the week starting on Sunday; `null` marks a day off.
    #[serde(default)]
    pub availabilities: Vec<Option<TimeWindowRequest>>,
}

pub type UpdateInstructorRequest = NewInstructorRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWindowRequest {
    pub start_time: String,
    pub end_time: String,
}
