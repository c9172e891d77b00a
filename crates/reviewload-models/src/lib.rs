mod endpoint;
mod outcome;
mod team;

pub use endpoint::Endpoint;
pub use outcome::{Outcome, RecordedOutcome};
pub use team::{Team, TeamMember};
