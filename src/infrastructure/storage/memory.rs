//! In-memory user registry

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    DomainResult, NewUser, UpdateUserDto, User, UserRepositoryInterface, UserRole,
};
use crate::shared::generate_id;

/// Ordered, process-local user registry.
///
/// One mutex guards the whole list so every call sees and leaves a
/// consistent registry; lookups are linear scans in insertion order.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Start from already loaded records. Callers keep ids unique.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn create_user(&self, user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().await;

        let mut id = generate_id();
        while users.iter().any(|u| u.id == id) {
            id = generate_id();
        }

        let user = User {
            id,
            name: user.name,
            age: user.age,
            email: user.email,
            role: user.role,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.lock().await.clone())
    }

    async fn list_users_by_role(&self, role: UserRole) -> DomainResult<Vec<User>> {
        let users = self.users.lock().await;
        Ok(users.iter().filter(|u| u.role == role).cloned().collect())
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.apply_update(dto)?;
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: &str) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().await;
        Ok(users
            .iter()
            .position(|u| u.id == id)
            .map(|index| users.remove(index)))
    }

    async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}
