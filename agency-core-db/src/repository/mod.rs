pub mod agent_repository;
pub mod create_batch;
pub mod find_by_code;
pub mod find_by_id;
pub mod find_by_parent;
pub mod in_memory;
pub mod list_all;
pub mod pagination;
pub mod record_sale;
pub mod reserve_next_sequence;
pub mod transition_status;
pub mod update_batch;

// Re-exports
pub use agent_repository::*;
pub use create_batch::*;
pub use find_by_code::*;
pub use find_by_id::*;
pub use find_by_parent::*;
pub use in_memory::*;
pub use list_all::*;
pub use pagination::*;
pub use record_sale::*;
pub use reserve_next_sequence::*;
pub use transition_status::*;
pub use update_batch::*;
