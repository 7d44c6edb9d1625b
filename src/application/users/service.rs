//! User registry service: application-layer orchestration
//!
//! HTTP handlers stay thin and delegate to this service.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, error, info};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserRepositoryInterface,
    UserRole,
};
use crate::shared::panic_message;

/// Runs a registry call; a panic inside it becomes `DomainError::Internal`.
async fn guarded<T>(call: impl Future<Output = DomainResult<T>>) -> DomainResult<T> {
    AssertUnwindSafe(call)
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| {
            let detail = panic_message(&*payload);
            error!(%detail, "Registry call panicked");
            Err(DomainError::Internal(detail))
        })
}

/// User service.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete registry.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        guarded(self.repo.list_users()).await
    }

    pub async fn get_user(&self, id: &str) -> DomainResult<User> {
        guarded(self.repo.get_user_by_id(id))
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Users holding `role`, in registry order. `role` must name one of the
    /// known roles.
    pub async fn list_users_by_role(&self, role: &str) -> DomainResult<Vec<User>> {
        let role = role.parse::<UserRole>().inspect_err(|e| {
            debug!(role, "Rejected role filter: {}", e);
        })?;
        guarded(self.repo.list_users_by_role(role)).await
    }

    pub async fn user_count(&self) -> usize {
        self.repo.count().await
    }

    // ── Commands (mutations) ────────────────────────────────────

    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let new_user = dto.validate().inspect_err(|e| {
            debug!("Rejected user creation: {}", e);
        })?;

        let user = guarded(self.repo.create_user(new_user)).await?;
        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Partial update. On a validation error, fields processed before the
    /// failing one have already been stored.
    pub async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<User> {
        match guarded(self.repo.update_user(id, dto)).await {
            Ok(Some(user)) => {
                info!(user_id = %user.id, "User updated");
                Ok(user)
            }
            Ok(None) => Err(DomainError::user_not_found(id)),
            Err(e) => {
                debug!(user_id = id, "Rejected user update: {}", e);
                Err(e)
            }
        }
    }

    pub async fn delete_user(&self, id: &str) -> DomainResult<User> {
        let user = guarded(self.repo.delete_user(id))
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        info!(user_id = %user.id, "User deleted");
        Ok(user)
    }
}
