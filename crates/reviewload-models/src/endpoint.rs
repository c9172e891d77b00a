use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Named request of the scenario.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Team registration.
    TeamAdd,
    /// Pull request creation.
    CreatePr,
    /// Reviewer reassignment.
    Reassign,
}

impl Endpoint {
    /// Every endpoint, in scenario order.
    pub const ALL: [Endpoint; 3] = [Self::TeamAdd, Self::CreatePr, Self::Reassign];

    /// Request name, as reported in outcomes.
    pub fn to_str(self) -> &'static str {
        self.into()
    }

    /// HTTP path on the target service.
    pub fn path(self) -> &'static str {
        match self {
            Self::TeamAdd => "/team/add",
            Self::CreatePr => "/pullRequest/create",
            Self::Reassign => "/pullRequest/reassign",
        }
    }

    /// Status codes considered as a business success.
    ///
    /// `team_add` accepts 400 because concurrent users register the same team,
    /// `reassign` accepts 409 when no replacement candidate exists.
    pub fn accepted_statuses(self) -> &'static [u16] {
        match self {
            Self::TeamAdd => &[200, 400],
            Self::CreatePr => &[201],
            Self::Reassign => &[200, 409],
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.to_str())
    }
}

impl From<Endpoint> for &'static str {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::TeamAdd => "team_add",
            Endpoint::CreatePr => "create_pr",
            Endpoint::Reassign => "reassign",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_match_serde() {
        for endpoint in Endpoint::ALL {
            assert_eq!(
                serde_json::to_string(&endpoint).unwrap(),
                format!("\"{endpoint}\"")
            );
        }
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("{:<10}|", Endpoint::Reassign), "reassign  |");
    }

    #[test]
    fn accepted_statuses() {
        assert_eq!(Endpoint::TeamAdd.accepted_statuses(), &[200, 400]);
        assert_eq!(Endpoint::CreatePr.accepted_statuses(), &[201]);
        assert_eq!(Endpoint::Reassign.accepted_statuses(), &[200, 409]);
    }
}
