use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Address;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Address>, RepositoryError>;
    /// Lookup scoped to the owner; another user's address is `NotFound`.
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Address, RepositoryError>;
    async fn find_default(&self, user_id: &UserId) -> Result<Option<Address>, RepositoryError>;
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
    /// Unsets the default flag on every address of the user. Returns the rows touched.
    async fn clear_default(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
    async fn save(&self, address: &Address) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}
