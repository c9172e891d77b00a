pub mod register_team;

#[cfg(any(test, feature = "testkit"))]
pub use register_team::MockRegisterTeamInterface;
pub use register_team::RegisterTeamInterface;
