//! The Tempo Timesheets worklog operations, layered on any [`JiraTransport`].

use std::fmt::Display;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{JiraTransport, RawResponse};
use crate::error::{Result, TempoError};
use crate::models::{Worklog, WorklogQuery};

/// REST base segment of the add-on, mounted under the tracker's own prefix.
pub const TEMPO_BASE: &str = "rest/tempo-timesheets/";

/// Client extension for the Tempo Timesheets add-on. Wraps a pre-configured
/// tracker client and an API version token (`3` and `"3"` both work), both
/// held for the lifetime of the instance.
///
/// Every operation is a single request with two outcomes: the parsed payload
/// on HTTP 200, a [`TempoError`] otherwise. There is no retry and no
/// cancellation; a re-issued create makes a second worklog.
///
/// ```no_run
/// # async fn demo() -> tempo_api::Result<()> {
/// use tempo_api::{JiraClient, JiraConfig, TempoTimesheets, WorklogQuery};
///
/// let jira = JiraClient::new(JiraConfig::new("https://jira.example.com", "bot", "token"))?;
/// let tempo = TempoTimesheets::new(jira, 3);
/// let logged = tempo.worklogs(&WorklogQuery::new().with_username("alice")).await?;
/// # let _ = logged; Ok(())
/// # }
/// ```
pub struct TempoTimesheets<C> {
    client: C,
    api_version: String,
}

impl<C: JiraTransport> TempoTimesheets<C> {
    pub fn new(client: C, api_version: impl ToString) -> Self {
        Self {
            client,
            api_version: api_version.to_string(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Lists the worklogs matching `query` (all of them for an empty query,
    /// subject to server-side permission trimming).
    pub async fn worklogs(&self, query: &WorklogQuery) -> Result<Vec<Worklog>> {
        let path = format!("/worklogs?{}", query.to_query_string());
        self.fetch(Method::GET, &path, None).await
    }

    /// Fetches a single worklog by id.
    pub async fn worklog_by_id(&self, id: impl Display) -> Result<Worklog> {
        self.fetch(Method::GET, &format!("/worklogs/{id}"), None).await
    }

    /// Creates a worklog and returns the record as echoed by the server
    /// (ids and server-computed fields filled in).
    pub async fn create_worklog(&self, worklog: &Worklog) -> Result<Worklog> {
        let body = serde_json::to_value(worklog)?;
        self.fetch(Method::POST, "/worklogs/", Some(&body)).await
    }

    /// Replaces an existing worklog with `worklog`, addressed by the id
    /// inside the record. Fails with [`TempoError::MissingId`] before any
    /// request is sent when the record has none.
    pub async fn update_worklog(&self, worklog: &Worklog) -> Result<Worklog> {
        let id = worklog.id_segment().ok_or(TempoError::MissingId)?;
        let body = serde_json::to_value(worklog)?;
        self.fetch(Method::PUT, &format!("/worklogs/{id}"), Some(&body)).await
    }

    /// Deletes a worklog by id.
    pub async fn delete_worklog(&self, id: impl Display) -> Result<()> {
        self.expect_ok(Method::DELETE, &format!("/worklogs/{id}"), None).await
    }

    async fn fetch<T>(&self, method: Method, path: &str, body: Option<&Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        serde_json::from_str(&response.body).map_err(TempoError::from)
    }

    async fn expect_ok(&self, method: Method, path: &str, body: Option<&Value>) -> Result<()> {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse> {
        let url = self.client.rest_url(TEMPO_BASE, &self.api_version, path);
        let response = self.client.execute(method, &url, body).await?;
        // The add-on signals success with 200 exactly; a 201 or 204 means
        // something else answered.
        if response.status != StatusCode::OK {
            return Err(TempoError::http(response.status, response.body));
        }
        Ok(response)
    }
}
