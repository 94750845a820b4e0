pub mod health;
pub mod modules;
pub mod shared;

pub use modules::role;
pub use modules::topic;

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::role::adapter::outgoing::StaticTokenRoleService;
use crate::role::application::ports::outgoing::RoleService;
use crate::shared::api::custom_json_config;
use crate::topic::adapter::outgoing::InMemoryTopicStore;
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, FollowTopicService, GetDeletedTopicsService,
    GetFollowersService, GetFollowingService, GetTopicService, GetTopicsService,
    UpdateTopicService,
};
use crate::topic::application::TopicUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let role_service: Arc<dyn RoleService> = Arc::new(
        StaticTokenRoleService::from_env().expect("API_TOKENS is not a valid token table"),
    );

    let store = InMemoryTopicStore::new();

    let state = AppState {
        topic: TopicUseCases {
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
        },
    };

    info!("Server running on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&role_service)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
    // Follows
    cfg.service(crate::topic::adapter::incoming::web::routes::get_followers_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::follow_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::unfollow_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_user_following_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_my_following_handler);
    // Trash
    cfg.service(crate::topic::adapter::incoming::web::routes::get_deleted_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::restore_trash_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::destroy_trash_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::restore_trash_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::destroy_trash_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
