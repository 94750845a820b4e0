mod create_topic_use_case;
mod delete_topic_use_case;
mod follow_topic_use_case;
mod get_deleted_topics_use_case;
mod get_followers_use_case;
mod get_following_use_case;
mod get_topic_use_case;
mod get_topics_use_case;
mod update_topic_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use delete_topic_use_case::{
    DeleteTopicError, DeleteTopicUseCase, DeleteTopicsError, DeleteTopicsUseCase,
};
pub use follow_topic_use_case::{
    FollowTopicError, FollowTopicUseCase, UnfollowTopicError, UnfollowTopicUseCase,
};
pub use get_deleted_topics_use_case::{GetDeletedTopicsError, GetDeletedTopicsUseCase};
pub use get_followers_use_case::{GetFollowersError, GetFollowersUseCase};
pub use get_following_use_case::{GetFollowingError, GetFollowingUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use update_topic_use_case::{
    UpdateTopicCommand, UpdateTopicCommandError, UpdateTopicError, UpdateTopicUseCase,
};
