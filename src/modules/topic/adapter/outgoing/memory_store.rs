use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::{
    FollowRepository, FollowRepositoryError, NewTopic, Page, PageRequest, TopicPatch, TopicQuery,
    TopicQueryError, TopicRecord, TopicRepository, TopicRepositoryError,
};

#[derive(Debug, Clone)]
struct StoredTopic {
    id: Uuid,
    name: String,
    description: String,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    // Monotonic insertion counter; created_at alone cannot break ties for
    // topics created within the same clock tick.
    seq: u64,
}

#[derive(Debug, Default)]
struct StoreInner {
    topics: HashMap<Uuid, StoredTopic>,
    // topic id -> followers in follow order
    follows: HashMap<Uuid, Vec<UserId>>,
    next_seq: u64,
}

/// In-process implementation of the three topic storage ports, backing
/// local runs and integration tests. Clones share the same state, so one
/// store can serve every service that needs a port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTopicStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreInner>, String> {
        self.inner.read().map_err(|e| e.to_string())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreInner>, String> {
        self.inner.write().map_err(|e| e.to_string())
    }
}

impl StoreInner {
    fn record(&self, topic: &StoredTopic) -> TopicRecord {
        TopicRecord {
            id: topic.id,
            name: topic.name.clone(),
            description: topic.description.clone(),
            follower_count: self.follows.get(&topic.id).map_or(0, |f| f.len() as u64),
            is_deleted: topic.is_deleted,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }

    fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> bool {
        let lowered = name.to_lowercase();
        self.topics.values().any(|t| {
            !t.is_deleted && Some(t.id) != exclude && t.name.to_lowercase() == lowered
        })
    }
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let skip = (page.page.saturating_sub(1) as usize) * page.per_page as usize;
    let items = items
        .into_iter()
        .skip(skip)
        .take(page.per_page as usize)
        .collect();

    Page {
        items,
        page: page.page,
        per_page: page.per_page,
        total,
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn get_topic(&self, topic_id: Uuid) -> Result<Option<TopicRecord>, TopicQueryError> {
        let inner = self.read().map_err(TopicQueryError::StorageError)?;

        Ok(inner
            .topics
            .get(&topic_id)
            .filter(|t| !t.is_deleted)
            .map(|t| inner.record(t)))
    }

    async fn list_topics(
        &self,
        deleted: bool,
        page: PageRequest,
    ) -> Result<Page<TopicRecord>, TopicQueryError> {
        let inner = self.read().map_err(TopicQueryError::StorageError)?;

        let mut topics: Vec<&StoredTopic> = inner
            .topics
            .values()
            .filter(|t| t.is_deleted == deleted)
            .collect();
        topics.sort_by(|a, b| b.seq.cmp(&a.seq));

        let records = topics.into_iter().map(|t| inner.record(t)).collect();
        Ok(paginate(records, page))
    }

    async fn get_topics_by_ids(
        &self,
        topic_ids: &[Uuid],
    ) -> Result<Vec<TopicRecord>, TopicQueryError> {
        let inner = self.read().map_err(TopicQueryError::StorageError)?;

        let mut topics: Vec<&StoredTopic> = topic_ids
            .iter()
            .filter_map(|id| inner.topics.get(id))
            .filter(|t| !t.is_deleted)
            .collect();
        topics.sort_by(|a, b| b.seq.cmp(&a.seq));

        Ok(topics.into_iter().map(|t| inner.record(t)).collect())
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn insert_topic(&self, data: NewTopic) -> Result<TopicRecord, TopicRepositoryError> {
        let mut inner = self.write().map_err(TopicRepositoryError::StorageError)?;

        if inner.name_taken(&data.name, None) {
            return Err(TopicRepositoryError::DuplicateName);
        }

        let now = Utc::now();
        let topic = StoredTopic {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            seq: inner.next_seq,
        };
        inner.next_seq += 1;

        let record = inner.record(&topic);
        inner.topics.insert(topic.id, topic);
        Ok(record)
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        patch: TopicPatch,
    ) -> Result<TopicRecord, TopicRepositoryError> {
        let mut inner = self.write().map_err(TopicRepositoryError::StorageError)?;

        match inner.topics.get(&topic_id) {
            Some(t) if !t.is_deleted => {}
            _ => return Err(TopicRepositoryError::TopicNotFound),
        }

        if let Some(name) = &patch.name {
            if inner.name_taken(name, Some(topic_id)) {
                return Err(TopicRepositoryError::DuplicateName);
            }
        }

        let topic = inner
            .topics
            .get_mut(&topic_id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        if let Some(name) = patch.name {
            topic.name = name;
        }
        if let Some(description) = patch.description {
            topic.description = description;
        }
        topic.updated_at = Utc::now();

        let topic = topic.clone();
        Ok(inner.record(&topic))
    }

    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let mut inner = self.write().map_err(TopicRepositoryError::StorageError)?;

        match inner.topics.get_mut(&topic_id) {
            Some(topic) if !topic.is_deleted => {
                topic.is_deleted = true;
                topic.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(TopicRepositoryError::TopicNotFound),
        }
    }

    async fn soft_delete_topics(&self, topic_ids: &[Uuid]) -> Result<(), TopicRepositoryError> {
        let mut inner = self.write().map_err(TopicRepositoryError::StorageError)?;

        for topic_id in topic_ids {
            if let Some(topic) = inner.topics.get_mut(topic_id) {
                if !topic.is_deleted {
                    topic.is_deleted = true;
                    topic.updated_at = Utc::now();
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl FollowRepository for InMemoryTopicStore {
    async fn add_follow(
        &self,
        user_id: UserId,
        topic_id: Uuid,
    ) -> Result<(), FollowRepositoryError> {
        let mut inner = self.write().map_err(FollowRepositoryError::StorageError)?;

        let followers = inner.follows.entry(topic_id).or_default();
        if followers.contains(&user_id) {
            return Err(FollowRepositoryError::AlreadyFollowing);
        }

        followers.push(user_id);
        Ok(())
    }

    async fn remove_follow(
        &self,
        user_id: UserId,
        topic_id: Uuid,
    ) -> Result<(), FollowRepositoryError> {
        let mut inner = self.write().map_err(FollowRepositoryError::StorageError)?;

        let followers = inner
            .follows
            .get_mut(&topic_id)
            .ok_or(FollowRepositoryError::NotFollowing)?;

        let before = followers.len();
        followers.retain(|u| *u != user_id);
        if followers.len() == before {
            return Err(FollowRepositoryError::NotFollowing);
        }

        Ok(())
    }

    async fn follower_count(&self, topic_id: Uuid) -> Result<u64, FollowRepositoryError> {
        let inner = self.read().map_err(FollowRepositoryError::StorageError)?;

        Ok(inner.follows.get(&topic_id).map_or(0, |f| f.len() as u64))
    }

    async fn followers_of(
        &self,
        topic_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<UserId>, FollowRepositoryError> {
        let inner = self.read().map_err(FollowRepositoryError::StorageError)?;

        let followers = inner.follows.get(&topic_id).cloned().unwrap_or_default();
        Ok(paginate(followers, page))
    }

    async fn topics_followed_by(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Uuid>, FollowRepositoryError> {
        let inner = self.read().map_err(FollowRepositoryError::StorageError)?;

        let mut followed: Vec<(u64, Uuid)> = inner
            .follows
            .iter()
            .filter(|(_, followers)| followers.contains(&user_id))
            .filter_map(|(topic_id, _)| {
                inner.topics.get(topic_id).map(|t| (t.seq, *topic_id))
            })
            .collect();
        followed.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(followed.into_iter().map(|(_, id)| id).collect())
    }
}
