mod create_topic;
mod delete_topic;
mod delete_topics;
mod follow_topic;
mod get_deleted_topics;
mod get_followers;
mod get_following;
mod get_topic;
mod get_topics;
mod trash;
mod unfollow_topic;
mod update_topic;

pub use create_topic::create_topic_handler;
pub use delete_topic::delete_topic_handler;
pub use delete_topics::delete_topics_handler;
pub use follow_topic::follow_topic_handler;
pub use get_deleted_topics::get_deleted_topics_handler;
pub use get_followers::get_followers_handler;
pub use get_following::{get_my_following_handler, get_user_following_handler};
pub use get_topic::get_topic_handler;
pub use get_topics::get_topics_handler;
pub use trash::{
    destroy_trash_topic_handler, destroy_trash_topics_handler, restore_trash_topic_handler,
    restore_trash_topics_handler,
};
pub use unfollow_topic::unfollow_topic_handler;
pub use update_topic::update_topic_handler;

use serde::Deserialize;

use crate::topic::application::ports::outgoing::PageRequest;

const DEFAULT_PER_PAGE: u32 = 15;
const MAX_PER_PAGE: u32 = 100;

/// Shared `?page=&per_page=` query DTO. Zero (or absent) values fall back
/// to defaults; `per_page` is clamped so a client cannot request the whole
/// table in one response.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,
}

impl From<PageQuery> for PageRequest {
    fn from(q: PageQuery) -> Self {
        PageRequest {
            page: if q.page == 0 { 1 } else { q.page },
            per_page: match q.per_page {
                0 => DEFAULT_PER_PAGE,
                n => n.min(MAX_PER_PAGE),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_defaults() {
        let page: PageRequest = PageQuery {
            page: 0,
            per_page: 0,
        }
        .into();

        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn per_page_is_clamped() {
        let page: PageRequest = PageQuery {
            page: 3,
            per_page: 5000,
        }
        .into();

        assert_eq!(page.page, 3);
        assert_eq!(page.per_page, MAX_PER_PAGE);
    }
}
