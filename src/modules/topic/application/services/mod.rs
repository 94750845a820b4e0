mod create_topic_service;
mod delete_topic_service;
mod follow_topic_service;
mod get_deleted_topics_service;
mod get_followers_service;
mod get_following_service;
mod get_topic_service;
mod get_topics_service;
mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use follow_topic_service::FollowTopicService;
pub use get_deleted_topics_service::GetDeletedTopicsService;
pub use get_followers_service::GetFollowersService;
pub use get_following_service::GetFollowingService;
pub use get_topic_service::GetTopicService;
pub use get_topics_service::GetTopicsService;
pub use update_topic_service::UpdateTopicService;
