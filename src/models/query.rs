use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filter for the worklog list operation. Every key is optional; only the
/// keys that are set appear on the wire.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorklogQuery {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub username: Option<String>,
    pub project_key: Option<String>,
    pub account_key: Option<String>,
    pub team_id: Option<String>,
}

impl WorklogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of the reporting period.
    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    /// End of the reporting period; the server ignores it without a start.
    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_project_key(mut self, key: impl Into<String>) -> Self {
        self.project_key = Some(key.into());
        self
    }

    pub fn with_account_key(mut self, key: impl Into<String>) -> Self {
        self.account_key = Some(key.into());
        self
    }

    pub fn with_team_id(mut self, id: impl Into<String>) -> Self {
        self.team_id = Some(id.into());
        self
    }

    /// Renders `key=value&` for each present key, in the fixed order the
    /// add-on documents. The trailing separator is intentional; the server
    /// tolerates it.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        let pairs = [
            ("dateFrom", &self.date_from),
            ("dateTo", &self.date_to),
            ("username", &self.username),
            ("projectKey", &self.project_key),
            ("accountKey", &self.account_key),
            ("teamId", &self.team_id),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                query.push_str(key);
                query.push('=');
                query.push_str(value);
                query.push('&');
            }
        }
        query
    }
}
