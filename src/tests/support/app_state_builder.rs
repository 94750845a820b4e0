use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::role::adapter::outgoing::StaticTokenRoleService;
use crate::role::application::ports::outgoing::RoleService;
use crate::tests::support::stubs::*;
use crate::topic::adapter::outgoing::InMemoryTopicStore;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, DeleteTopicsUseCase, FollowTopicUseCase,
    GetDeletedTopicsUseCase, GetFollowersUseCase, GetFollowingUseCase, GetTopicUseCase,
    GetTopicsUseCase, UnfollowTopicUseCase, UpdateTopicUseCase,
};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, FollowTopicService, GetDeletedTopicsService,
    GetFollowersService, GetFollowingService, GetTopicService, GetTopicsService,
    UpdateTopicService,
};
use crate::topic::application::TopicUseCases;
use crate::AppState;

pub const MANAGER_USER_ID: Uuid = Uuid::from_u128(0x00000000_0000_4000_8000_000000000001);
pub const MEMBER_USER_ID: Uuid = Uuid::from_u128(0x00000000_0000_4000_8000_000000000002);

/// Role service answering `Bearer manager-token` with a manager identity.
pub fn manager_role_service() -> web::Data<Arc<dyn RoleService>> {
    role_service(&format!("manager-token={MANAGER_USER_ID}:manager"))
}

/// Role service answering `Bearer member-token` with a plain member identity.
pub fn member_role_service() -> web::Data<Arc<dyn RoleService>> {
    role_service(&format!("member-token={MEMBER_USER_ID}:member"))
}

fn role_service(spec: &str) -> web::Data<Arc<dyn RoleService>> {
    let service: Arc<dyn RoleService> = Arc::new(StaticTokenRoleService::parse(spec).unwrap());
    web::Data::new(service)
}

pub struct TestAppStateBuilder {
    create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    delete_many: Arc<dyn DeleteTopicsUseCase + Send + Sync>,
    get_one: Arc<dyn GetTopicUseCase + Send + Sync>,
    get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    get_deleted: Arc<dyn GetDeletedTopicsUseCase + Send + Sync>,
    follow: Arc<dyn FollowTopicUseCase + Send + Sync>,
    unfollow: Arc<dyn UnfollowTopicUseCase + Send + Sync>,
    get_followers: Arc<dyn GetFollowersUseCase + Send + Sync>,
    get_following: Arc<dyn GetFollowingUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create: Arc::new(StubCreateTopicUseCase),
            update: Arc::new(StubUpdateTopicUseCase),
            delete: Arc::new(StubDeleteTopicUseCase),
            delete_many: Arc::new(StubDeleteTopicUseCase),
            get_one: Arc::new(StubGetTopicUseCase),
            get_list: Arc::new(StubGetTopicsUseCase),
            get_deleted: Arc::new(StubGetDeletedTopicsUseCase),
            follow: Arc::new(StubFollowTopicUseCase),
            unfollow: Arc::new(StubFollowTopicUseCase),
            get_followers: Arc::new(StubGetFollowersUseCase),
            get_following: Arc::new(StubGetFollowingUseCase),
        }
    }
}

impl TestAppStateBuilder {
    /// All use cases wired to real services over the given store, for tests
    /// that want end-to-end behavior instead of mocks.
    pub fn with_store(store: InMemoryTopicStore) -> Self {
        Self {
            create: Arc::new(CreateTopicService::new(store.clone())),
            update: Arc::new(UpdateTopicService::new(store.clone())),
            delete: Arc::new(DeleteTopicService::new(store.clone())),
            delete_many: Arc::new(DeleteTopicService::new(store.clone())),
            get_one: Arc::new(GetTopicService::new(store.clone())),
            get_list: Arc::new(GetTopicsService::new(store.clone())),
            get_deleted: Arc::new(GetDeletedTopicsService::new(store.clone())),
            follow: Arc::new(FollowTopicService::new(store.clone(), store.clone())),
            unfollow: Arc::new(FollowTopicService::new(store.clone(), store.clone())),
            get_followers: Arc::new(GetFollowersService::new(store.clone(), store.clone())),
            get_following: Arc::new(GetFollowingService::new(store.clone(), store)),
        }
    }

    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + Send + Sync + 'static) -> Self {
        self.create = Arc::new(uc);
        self
    }

    pub fn with_update_topic(mut self, uc: impl UpdateTopicUseCase + Send + Sync + 'static) -> Self {
        self.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(mut self, uc: impl DeleteTopicUseCase + Send + Sync + 'static) -> Self {
        self.delete = Arc::new(uc);
        self
    }

    pub fn with_delete_topics(
        mut self,
        uc: impl DeleteTopicsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_many = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.get_one = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_deleted_topics(
        mut self,
        uc: impl GetDeletedTopicsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_deleted = Arc::new(uc);
        self
    }

    pub fn with_follow_topic(mut self, uc: impl FollowTopicUseCase + Send + Sync + 'static) -> Self {
        self.follow = Arc::new(uc);
        self
    }

    pub fn with_unfollow_topic(
        mut self,
        uc: impl UnfollowTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.unfollow = Arc::new(uc);
        self
    }

    pub fn with_get_followers(
        mut self,
        uc: impl GetFollowersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_followers = Arc::new(uc);
        self
    }

    pub fn with_get_following(
        mut self,
        uc: impl GetFollowingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_following = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: TopicUseCases {
                create: self.create,
                update: self.update,
                delete: self.delete,
                delete_many: self.delete_many,
                get_one: self.get_one,
                get_list: self.get_list,
                get_deleted: self.get_deleted,
                follow: self.follow,
                unfollow: self.unfollow,
                get_followers: self.get_followers,
                get_following: self.get_following,
            },
        })
    }
}
