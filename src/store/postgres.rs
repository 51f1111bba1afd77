/**
 * PostgreSQL Store Backend
 *
 * sqlx-backed implementation of the repository traits. Email uniqueness is
 * enforced by a unique index on `users.email` (see `migrations/`); the unique
 * violation reported by the driver is mapped to `StoreError::DuplicateEmail`
 * so concurrent signups for one email resolve to exactly one winner.
 *
 * All bookmark queries filter on `owner_id` in SQL, so an id belonging to
 * another user simply matches no rows.
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use async_trait::async_trait;

use crate::store::{
    Bookmark, BookmarkChanges, BookmarkStore, NewBookmark, NewUser, StoreError, User, UserChanges,
    UserStore,
};

const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, created_at, updated_at";

const BOOKMARK_COLUMNS: &str =
    "id, owner_id, title, link, description, created_at, updated_at";

/// Store backend over a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation to the store's conflict error
fn map_unique_violation(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO users (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.email)
            .bind(&new.password_hash)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_unique_violation)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update_user(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<User>, StoreError> {
        let sql = format!(
            r#"
            UPDATE users
            SET email = COALESCE($1, email),
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                updated_at = $4
            WHERE id = $5
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&changes.email)
            .bind(&changes.first_name)
            .bind(&changes.last_name)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_unique_violation)
    }
}

#[async_trait]
impl BookmarkStore for PgStore {
    async fn create_bookmark(
        &self,
        owner_id: Uuid,
        new: NewBookmark,
    ) -> Result<Bookmark, StoreError> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO bookmarks (id, owner_id, title, link, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {BOOKMARK_COLUMNS}
            "#
        );

        let bookmark = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(Uuid::new_v4())
            .bind(owner_id)
            .bind(&new.title)
            .bind(&new.link)
            .bind(&new.description)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(bookmark)
    }

    async fn list_bookmarks(&self, owner_id: Uuid) -> Result<Vec<Bookmark>, StoreError> {
        let sql = format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE owner_id = $1 ORDER BY created_at"
        );

        let bookmarks = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(bookmarks)
    }

    async fn find_bookmark(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Bookmark>, StoreError> {
        let sql = format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE owner_id = $1 AND id = $2"
        );

        let bookmark = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(owner_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bookmark)
    }

    async fn update_bookmark(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, StoreError> {
        let sql = format!(
            r#"
            UPDATE bookmarks
            SET title = COALESCE($1, title),
                link = COALESCE($2, link),
                description = COALESCE($3, description),
                updated_at = $4
            WHERE owner_id = $5 AND id = $6
            RETURNING {BOOKMARK_COLUMNS}
            "#
        );

        let bookmark = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(&changes.title)
            .bind(&changes.link)
            .bind(&changes.description)
            .bind(Utc::now())
            .bind(owner_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bookmark)
    }

    async fn delete_bookmark(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
