pub mod app_state_builder;
pub mod stubs;

pub use app_state_builder::{TestAppStateBuilder, MEMBER_USER_ID};
