use reviewload_config::ScenarioConfig;
use reviewload_models::Team;

/// Fixed data shared by every virtual user, built once before the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub team: Team,
    pub author_id: String,
}

impl Scenario {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self {
            team: Team::with_default_members(&config.team_name),
            author_id: config.author_id.clone(),
        }
    }
}
