use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{MoodFilter, Thought};

#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Which partition of the collection a listing reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFilter {
    /// Public feed: only `is_public` entries.
    Public,
    /// Everything the given author wrote, public or private.
    Author(Uuid),
}

#[derive(Debug, Clone, Copy)]
pub struct ThoughtFilter {
    pub scope: ScopeFilter,
    pub mood: MoodFilter,
}

impl ThoughtFilter {
    fn matches(&self, thought: &Thought) -> bool {
        let in_scope = match self.scope {
            ScopeFilter::Public => thought.is_public,
            ScopeFilter::Author(author_id) => thought.author_id == Some(author_id),
        };
        in_scope && self.mood.matches(thought.mood)
    }
}

/// Persistence contract for thoughts. The handlers only see this trait, so
/// tests can swap in a failing or pre-seeded implementation.
#[async_trait]
pub trait ThoughtStore: Send + Sync {
    async fn insert(&self, thought: Thought) -> Result<Thought, StoreError>;

    /// Filtered view, newest first.
    async fn list(&self, filter: ThoughtFilter) -> Result<Vec<Thought>, StoreError>;
}

/// In-process store backed by a concurrent map.
#[derive(Default)]
pub struct MemoryStore {
    thoughts: DashMap<Uuid, Thought>,
}

#[async_trait]
impl ThoughtStore for MemoryStore {
    async fn insert(&self, thought: Thought) -> Result<Thought, StoreError> {
        self.thoughts.insert(thought.id, thought.clone());
        Ok(thought)
    }

    async fn list(&self, filter: ThoughtFilter) -> Result<Vec<Thought>, StoreError> {
        let mut thoughts: Vec<Thought> = self
            .thoughts
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        // Sort by creation date (newest first)
        thoughts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(thoughts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use chrono::{TimeZone, Utc};

    fn thought(
        author_id: Option<Uuid>,
        content: &str,
        is_public: bool,
        mood: Option<Mood>,
        at_secs: i64,
    ) -> Thought {
        Thought {
            id: Uuid::new_v4(),
            author_id,
            content: content.to_string(),
            is_public,
            mood,
            created_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
        }
    }

    fn all_public() -> ThoughtFilter {
        ThoughtFilter {
            scope: ScopeFilter::Public,
            mood: MoodFilter::Any,
        }
    }

    #[tokio::test]
    async fn insert_then_list_round_trips() {
        let store = MemoryStore::default();
        let created = store
            .insert(thought(None, "hello", true, Some(Mood::Calm), 100))
            .await
            .unwrap();

        let listed = store.list(all_public()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].content, "hello");
        assert_eq!(listed[0].mood, Some(Mood::Calm));
    }

    #[tokio::test]
    async fn public_scope_hides_private_entries() {
        let store = MemoryStore::default();
        let author = Uuid::new_v4();
        store
            .insert(thought(Some(author), "private", false, None, 100))
            .await
            .unwrap();
        store
            .insert(thought(Some(author), "public", true, None, 200))
            .await
            .unwrap();

        let listed = store.list(all_public()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content, "public");
    }

    #[tokio::test]
    async fn author_scope_returns_only_that_author() {
        let store = MemoryStore::default();
        let me = Uuid::new_v4();
        let someone_else = Uuid::new_v4();
        store
            .insert(thought(Some(me), "mine, private", false, None, 100))
            .await
            .unwrap();
        store
            .insert(thought(Some(me), "mine, public", true, None, 200))
            .await
            .unwrap();
        store
            .insert(thought(Some(someone_else), "theirs", true, None, 300))
            .await
            .unwrap();
        store
            .insert(thought(None, "anonymous", true, None, 400))
            .await
            .unwrap();

        let listed = store
            .list(ThoughtFilter {
                scope: ScopeFilter::Author(me),
                mood: MoodFilter::Any,
            })
            .await
            .unwrap();
        let contents: Vec<&str> = listed.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["mine, public", "mine, private"]);
    }

    #[tokio::test]
    async fn mood_filter_partitions_the_feed() {
        let store = MemoryStore::default();
        store
            .insert(thought(None, "happy", true, Some(Mood::Happy), 100))
            .await
            .unwrap();
        store
            .insert(thought(None, "sad", true, Some(Mood::Sad), 200))
            .await
            .unwrap();
        store
            .insert(thought(None, "untagged", true, None, 300))
            .await
            .unwrap();

        let unset = store
            .list(ThoughtFilter {
                scope: ScopeFilter::Public,
                mood: MoodFilter::Unset,
            })
            .await
            .unwrap();
        assert_eq!(unset.len(), 1);
        assert_eq!(unset[0].content, "untagged");

        let happy = store
            .list(ThoughtFilter {
                scope: ScopeFilter::Public,
                mood: MoodFilter::Is(Mood::Happy),
            })
            .await
            .unwrap();
        assert_eq!(happy.len(), 1);
        assert_eq!(happy[0].content, "happy");

        let everything = store.list(all_public()).await.unwrap();
        assert_eq!(everything.len(), 3);
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let store = MemoryStore::default();
        store.insert(thought(None, "t1", true, None, 100)).await.unwrap();
        store.insert(thought(None, "t3", true, None, 300)).await.unwrap();
        store.insert(thought(None, "t2", true, None, 200)).await.unwrap();

        let listed = store.list(all_public()).await.unwrap();
        let contents: Vec<&str> = listed.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["t3", "t2", "t1"]);
    }

    #[tokio::test]
    async fn empty_match_is_an_empty_list() {
        let store = MemoryStore::default();
        store
            .insert(thought(None, "private only", false, None, 100))
            .await
            .unwrap();

        let listed = store.list(all_public()).await.unwrap();
        assert!(listed.is_empty());
    }
}
