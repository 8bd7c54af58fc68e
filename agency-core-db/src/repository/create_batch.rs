use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// All creates are performed atomically: either every item is stored or
/// none is.
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// # Arguments
    /// * `items` - A vector of entities to create
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created entities
    /// * `Err` - An error if an item could not be stored (e.g. duplicate id or code)
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
