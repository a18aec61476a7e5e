mod query;
mod worklog;

pub use query::WorklogQuery;
pub use worklog::{Worklog, WorklogAuthor, WorklogIssue};
