//! Use cases (application services)

pub mod agent_runner;
pub mod fan_out;
pub mod run_team;
pub mod synthesis;

#[cfg(test)]
pub(crate) mod test_support;
