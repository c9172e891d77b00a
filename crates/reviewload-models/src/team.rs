use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

const DEFAULT_MEMBERS: [(&str, &str); 4] =
    [("u1", "Alice"), ("u2", "Bob"), ("u3", "Cara"), ("u4", "Dave")];

/// Team member.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, SmartDefault)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    #[default = true]
    pub is_active: bool,
}

impl TeamMember {
    pub fn new<T: Into<String>, U: Into<String>>(user_id: T, username: U) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            ..Default::default()
        }
    }
}

/// Team registered by every virtual user, also the body of `/team/add`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Team {
    pub team_name: String,
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Build the fixed roster under the given team name.
    pub fn with_default_members<T: Into<String>>(team_name: T) -> Self {
        Self {
            team_name: team_name.into(),
            members: DEFAULT_MEMBERS
                .iter()
                .map(|(user_id, username)| TeamMember::new(*user_id, *username))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_roster_body() {
        let team = Team::with_default_members("payments");

        assert_eq!(
            serde_json::to_value(&team).unwrap(),
            json!({
                "team_name": "payments",
                "members": [
                    {"user_id": "u1", "username": "Alice", "is_active": true},
                    {"user_id": "u2", "username": "Bob", "is_active": true},
                    {"user_id": "u3", "username": "Cara", "is_active": true},
                    {"user_id": "u4", "username": "Dave", "is_active": true},
                ]
            })
        );
    }
}
