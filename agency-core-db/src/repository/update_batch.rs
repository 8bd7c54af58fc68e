use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for replacing multiple entities in a batch
///
/// Each item replaces the stored entity with the same id as a whole.
#[async_trait]
pub trait UpdateBatch<T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(Vec<T>)` - The updated entities
    /// * `Err` - An error if any item does not exist or could not be written
    async fn update_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
