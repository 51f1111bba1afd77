/**
 * In-Memory Store Backend
 *
 * Mutex-guarded maps implementing the repository traits. Used by the test
 * suite and for running the server without a database.
 *
 * The single mutex makes every operation atomic, which gives this backend the
 * same uniqueness guarantee the PostgreSQL backend gets from its unique index:
 * of N concurrent `create_user` calls with one email, exactly one wins.
 */

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use async_trait::async_trait;

use crate::store::{
    Bookmark, BookmarkChanges, BookmarkStore, NewBookmark, NewUser, StoreError, User, UserChanges,
    UserStore,
};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    bookmarks: HashMap<Uuid, Bookmark>,
}

/// In-memory store backend
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        if inner.users.values().any(|u| u.email == new.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new.email,
            password_hash: new.password_hash,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.users.get(&id).cloned())
    }

    async fn update_user(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        if let Some(email) = &changes.email {
            if inner.users.values().any(|u| u.email == *email && u.id != id) {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(first_name) = changes.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = changes.last_name {
            user.last_name = Some(last_name);
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn create_bookmark(
        &self,
        owner_id: Uuid,
        new: NewBookmark,
    ) -> Result<Bookmark, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        let now = Utc::now();
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            owner_id,
            title: new.title,
            link: new.link,
            description: new.description,
            created_at: now,
            updated_at: now,
        };
        inner.bookmarks.insert(bookmark.id, bookmark.clone());

        Ok(bookmark)
    }

    async fn list_bookmarks(&self, owner_id: Uuid) -> Result<Vec<Bookmark>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");

        let mut bookmarks: Vec<Bookmark> = inner
            .bookmarks
            .values()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect();
        bookmarks.sort_by_key(|b| b.created_at);

        Ok(bookmarks)
    }

    async fn find_bookmark(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Bookmark>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");

        Ok(inner
            .bookmarks
            .get(&id)
            .filter(|b| b.owner_id == owner_id)
            .cloned())
    }

    async fn update_bookmark(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        let Some(bookmark) = inner
            .bookmarks
            .get_mut(&id)
            .filter(|b| b.owner_id == owner_id)
        else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            bookmark.title = title;
        }
        if let Some(link) = changes.link {
            bookmark.link = link;
        }
        if let Some(description) = changes.description {
            bookmark.description = Some(description);
        }
        bookmark.updated_at = Utc::now();

        Ok(Some(bookmark.clone()))
    }

    async fn delete_bookmark(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        let owned = inner
            .bookmarks
            .get(&id)
            .is_some_and(|b| b.owner_id == owner_id);
        if owned {
            inner.bookmarks.remove(&id);
        }

        Ok(owned)
    }
}
