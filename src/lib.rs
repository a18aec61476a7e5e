//! Typed Rust client for the Tempo Timesheets REST add-on.
//!
//! The add-on lives under `rest/tempo-timesheets/{version}` on a Jira host
//! and exposes worklog records. [`TempoTimesheets`] carries the five worklog
//! operations and runs on top of any [`JiraTransport`] implementor — the
//! bundled reqwest-backed [`JiraClient`], or an existing tracker client of
//! your own wrapped in the trait.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod worklogs;

pub use client::{JiraClient, JiraTransport, RawResponse};
pub use config::JiraConfig;
pub use error::{Result, TempoError};
pub use models::{Worklog, WorklogAuthor, WorklogIssue, WorklogQuery};
pub use worklogs::{TempoTimesheets, TEMPO_BASE};
