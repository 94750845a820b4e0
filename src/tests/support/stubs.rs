//! Inert use-case implementations. Handler tests replace the one they
//! exercise through `TestAppStateBuilder`; the rest of the state is filled
//! with these.

use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, DeleteTopicsError, DeleteTopicsUseCase, FollowTopicError,
    FollowTopicUseCase, GetDeletedTopicsError, GetDeletedTopicsUseCase, GetFollowersError,
    GetFollowersUseCase, GetFollowingError, GetFollowingUseCase, GetTopicError, GetTopicUseCase,
    GetTopicsError, GetTopicsUseCase, UnfollowTopicError, UnfollowTopicUseCase,
    UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{Page, PageRequest, TopicRecord};

pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError> {
        Ok(TopicRecord {
            id: Uuid::new_v4(),
            name: command.name().to_string(),
            description: command.description().to_string(),
            follower_count: 0,
            is_deleted: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        })
    }
}

pub struct StubUpdateTopicUseCase;

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, _command: UpdateTopicCommand) -> Result<TopicRecord, UpdateTopicError> {
        Err(UpdateTopicError::TopicNotFound)
    }
}

pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        Ok(())
    }
}

#[async_trait]
impl DeleteTopicsUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_ids: Vec<Uuid>) -> Result<(), DeleteTopicsError> {
        Ok(())
    }
}

pub struct StubGetTopicUseCase;

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<TopicRecord, GetTopicError> {
        Err(GetTopicError::TopicNotFound)
    }
}

pub struct StubGetTopicsUseCase;

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self, page: PageRequest) -> Result<Page<TopicRecord>, GetTopicsError> {
        Ok(Page::empty(page))
    }
}

pub struct StubGetDeletedTopicsUseCase;

#[async_trait]
impl GetDeletedTopicsUseCase for StubGetDeletedTopicsUseCase {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Page<TopicRecord>, GetDeletedTopicsError> {
        Ok(Page::empty(page))
    }
}

pub struct StubFollowTopicUseCase;

#[async_trait]
impl FollowTopicUseCase for StubFollowTopicUseCase {
    async fn execute(&self, _user_id: UserId, _topic_id: Uuid) -> Result<u64, FollowTopicError> {
        Ok(0)
    }
}

#[async_trait]
impl UnfollowTopicUseCase for StubFollowTopicUseCase {
    async fn execute(&self, _user_id: UserId, _topic_id: Uuid) -> Result<u64, UnfollowTopicError> {
        Ok(0)
    }
}

pub struct StubGetFollowersUseCase;

#[async_trait]
impl GetFollowersUseCase for StubGetFollowersUseCase {
    async fn execute(
        &self,
        _topic_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<UserId>, GetFollowersError> {
        Ok(Page::empty(page))
    }
}

pub struct StubGetFollowingUseCase;

#[async_trait]
impl GetFollowingUseCase for StubGetFollowingUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<TopicRecord>, GetFollowingError> {
        Ok(vec![])
    }
}
