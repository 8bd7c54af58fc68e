use uuid::Uuid;

/// Entities addressable by a UUID primary key
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}
