//! List-fetch client core for the OctoFit fitness dashboard.
//!
//! # Overview
//! Each dashboard view (activities, leaderboard, teams, users, workouts)
//! fetches one collection from the backend and renders it with loading and
//! error states. This crate is the shared part: it resolves the collection
//! URL, performs one GET, unwraps either response envelope, classifies
//! failures, and exposes a `ViewState` to the renderer.
//!
//! # Design
//! - `ListClient` is stateless; it holds only the `Environment`.
//! - The request is built and the response classified as plain data
//!   (`build_list` / `parse_list`), so the I/O boundary is the `Transport`
//!   trait and everything else is deterministic.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod http;
mod lenient;
pub mod resource;
pub mod state;
pub mod transport;
pub mod types;

pub use client::ListClient;
pub use config::{ClientConfig, Environment};
pub use endpoint::resolve_endpoint;
pub use error::{FetchError, UnknownResource};
pub use http::{HttpRequest, HttpResponse};
pub use resource::{Resource, ResourceKind};
pub use state::{Activation, ListView, ViewState};
pub use transport::{Transport, UreqTransport};
pub use types::{Activity, ItemId, LeaderboardEntry, Team, User, Workout};
