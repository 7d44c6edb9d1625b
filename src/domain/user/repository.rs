use async_trait::async_trait;

use super::{NewUser, UpdateUserDto, User, UserRole};
use crate::domain::DomainResult;

/// Registry access. Implementations must run each call as one
/// uninterrupted read-or-mutate step.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Store a validated user under a freshly generated, unused id.
    async fn create_user(&self, user: NewUser) -> DomainResult<User>;

    async fn list_users(&self) -> DomainResult<Vec<User>>;
    async fn list_users_by_role(&self, role: UserRole) -> DomainResult<Vec<User>>;
    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// `Ok(None)` when no user has `id`. A validation error may leave the
    /// record partially updated (see [`User::apply_update`]).
    async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<Option<User>>;

    /// Returns the removed record, or `None` when no user has `id`.
    async fn delete_user(&self, id: &str) -> DomainResult<Option<User>>;

    async fn count(&self) -> usize;
}
