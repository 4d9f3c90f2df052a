use std::{fmt, str::FromStr};

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Swim disciplines an instructor can teach and a student can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwimStyle {
    Chest,
    BackStroke,
    ButterflyStroke,
    Rowing,
}

impl SwimStyle {
    pub const ALL: [SwimStyle; 4] = [
        SwimStyle::Chest,
        SwimStyle::BackStroke,
        SwimStyle::ButterflyStroke,
        SwimStyle::Rowing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SwimStyle::Chest => "CHEST",
            SwimStyle::BackStroke => "BACK_STROKE",
            SwimStyle::ButterflyStroke => "BUTTERFLY_STROKE",
            SwimStyle::Rowing => "ROWING",
        }
    }
}

impl fmt::Display for SwimStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwimStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwimStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid specialty: {}. Must be one of: {}",
                    s,
                    join_names(SwimStyle::ALL.iter().map(SwimStyle::as_str))
                )
            })
    }
}

/// The kind of lesson. Each kind has a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LessonType {
    Public,
    Private,
    Mixed,
}

impl LessonType {
    pub const ALL: [LessonType; 3] = [LessonType::Public, LessonType::Private, LessonType::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Public => "PUBLIC",
            LessonType::Private => "PRIVATE",
            LessonType::Mixed => "MIXED",
        }
    }

    /// Exact length a lesson of this type must have.
    pub fn duration(&self) -> Duration {
        match self {
            LessonType::Public => Duration::minutes(45),
            LessonType::Private | LessonType::Mixed => Duration::minutes(60),
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LessonType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid lesson type: {}. Must be one of: {}",
                    s,
                    join_names(LessonType::ALL.iter().map(LessonType::as_str))
                )
            })
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
