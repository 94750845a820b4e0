use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, DeleteTopicsUseCase, FollowTopicUseCase,
    GetDeletedTopicsUseCase, GetFollowersUseCase, GetFollowingUseCase, GetTopicUseCase,
    GetTopicsUseCase, UnfollowTopicUseCase, UpdateTopicUseCase,
};

/// Every incoming port of the topic module, bundled for `AppState`.
#[derive(Clone)]
pub struct TopicUseCases {
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub delete_many: Arc<dyn DeleteTopicsUseCase + Send + Sync>,
    pub get_one: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_deleted: Arc<dyn GetDeletedTopicsUseCase + Send + Sync>,
    pub follow: Arc<dyn FollowTopicUseCase + Send + Sync>,
    pub unfollow: Arc<dyn UnfollowTopicUseCase + Send + Sync>,
    pub get_followers: Arc<dyn GetFollowersUseCase + Send + Sync>,
    pub get_following: Arc<dyn GetFollowingUseCase + Send + Sync>,
}
