use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pull request creation (API version)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PullRequestCreation {
    /// Pull request ID.
    pub pull_request_id: String,
    /// Pull request name.
    pub pull_request_name: String,
    /// Author ID.
    pub author_id: String,
}

/// Reviewer reassignment (API version)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PullRequestReassignment {
    /// Pull request ID.
    pub pull_request_id: String,
    /// Reviewer to replace.
    pub old_user_id: String,
}

/// Pull request creation response.
///
/// Only the assigned reviewers matter here. The body is read leniently: an
/// absent, null or oddly shaped `pr` or `assigned_reviewers` yields no
/// reviewers instead of an error. Reviewers are kept up to the first entry
/// which is not a string, so positions never shift.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PullRequestCreated {
    /// Assigned reviewers, in service order.
    pub assigned_reviewers: Vec<String>,
}

impl From<&Value> for PullRequestCreated {
    fn from(body: &Value) -> Self {
        let assigned_reviewers = body
            .get("pr")
            .and_then(|pr| pr.get("assigned_reviewers"))
            .and_then(Value::as_array)
            .map(|reviewers| {
                reviewers
                    .iter()
                    .map_while(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { assigned_reviewers }
    }
}
