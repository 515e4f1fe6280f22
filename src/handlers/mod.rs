// Handler exports
pub mod matches;
pub mod scenario;

pub use matches::{find_group_matches, AppState, HandlerError};
pub use scenario::{load_scenario, Scenario};
