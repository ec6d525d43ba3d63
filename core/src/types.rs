//! Resource DTOs for the fitness API.
//!
//! # Design
//! Every field is optional and decoded leniently (see `lenient`): a field of
//! the wrong type reads as absent instead of rejecting the row, so every
//! object the backend sends becomes a row. The backend has shipped several
//! field-name families over time; where two names carry the same metric, an
//! accessor picks the first one present and applies the display default.
//! Numeric measurements are `f64` so integer, fractional and numeric-string
//! encodings all decode.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::lenient;
use crate::resource::{Resource, ResourceKind};

/// Identifier as sent by the backend: numeric in fixtures, string-encoded
/// object ids in production. Numbers keep their JSON form, so fractional
/// and out-of-`i64` ids survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(Number),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub activity_type: Option<String>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration: Option<f64>,
    /// Kilometres.
    #[serde(default, deserialize_with = "lenient::number")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories_burned: Option<f64>,
    /// Name used by the backend serializer.
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
}

impl Activity {
    pub fn burned_calories(&self) -> Option<f64> {
        self.calories_burned.or(self.calories)
    }
}

impl Resource for Activity {
    const KIND: ResourceKind = ResourceKind::Activities;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_points: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub activity_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub activities: Option<f64>,
}

impl LeaderboardEntry {
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn points(&self) -> f64 {
        self.total_points.or(self.points).unwrap_or(0.0)
    }

    pub fn activity_count(&self) -> f64 {
        self.activity_count.or(self.activities).unwrap_or(0.0)
    }

    /// Rank is positional: entries arrive ordered by points.
    pub fn rank_label(index: usize) -> String {
        format!("#{}", index + 1)
    }
}

impl Resource for LeaderboardEntry {
    const KIND: ResourceKind = ResourceKind::Leaderboard;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub member_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub members: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

impl Team {
    pub fn members_count(&self) -> u64 {
        self.member_count
            .or_else(|| self.members.as_ref().map(|m| m.len() as u64))
            .unwrap_or(0)
    }
}

impl Resource for Team {
    const KIND: ResourceKind = ResourceKind::Teams;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date_joined: Option<String>,
}

impl User {
    /// Present only when both name parts are non-empty.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                Some(format!("{first} {last}"))
            }
            _ => None,
        }
    }
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::Users;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub workout_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
}

impl Workout {
    pub fn title(&self) -> Option<&str> {
        self.name.as_deref().or(self.workout_type.as_deref())
    }
}

impl Resource for Workout {
    const KIND: ResourceKind = ResourceKind::Workouts;
}
