use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Paginated listing of every entity in a store
#[async_trait]
pub trait ListAll<T: Identifiable>: Send + Sync {
    /// # Arguments
    /// * `page` - Window of the listing to return
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested window together with the total count
    /// * `Err` - An error if the query could not be executed
    async fn list_all(&self, page: PageRequest) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
