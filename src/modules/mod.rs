pub mod role;
pub mod topic;
