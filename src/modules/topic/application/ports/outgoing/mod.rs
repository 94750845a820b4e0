mod follow_repository;
mod topic_query;
mod topic_repository;

pub use follow_repository::{FollowRepository, FollowRepositoryError};
pub use topic_query::{Page, PageRequest, TopicQuery, TopicQueryError, TopicRecord};
pub use topic_repository::{NewTopic, TopicPatch, TopicRepository, TopicRepositoryError};
