//! Resource kinds exposed by the fitness API.
//!
//! # Design
//! Each kind owns exactly one path segment under `/api/`. The mapping is a
//! total `match`, so adding a variant without a segment fails to compile.
//! `Resource` ties a typed DTO to its kind so callers never pass the two
//! separately and cannot pair `Team` with the `users` endpoint.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::UnknownResource;

/// A collection served by the backend under `/api/{segment}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Activities,
        ResourceKind::Leaderboard,
        ResourceKind::Teams,
        ResourceKind::Users,
        ResourceKind::Workouts,
    ];

    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Activities => "activities",
            ResourceKind::Leaderboard => "leaderboard",
            ResourceKind::Teams => "teams",
            ResourceKind::Users => "users",
            ResourceKind::Workouts => "workouts",
        }
    }

    /// Text a renderer shows for a `Ready` state with no rows.
    pub fn empty_message(self) -> &'static str {
        match self {
            ResourceKind::Activities => "No activities found.",
            ResourceKind::Leaderboard => "No leaderboard data found.",
            ResourceKind::Teams => "No teams found.",
            ResourceKind::Users => "No users found.",
            ResourceKind::Workouts => "No workouts found.",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// A typed item that lives in exactly one resource collection.
pub trait Resource: DeserializeOwned {
    const KIND: ResourceKind;
}
