pub mod repo_impl;
pub mod create_batch;
pub mod find_by_code;
pub mod find_by_id;
pub mod find_by_parent;
pub mod list_all;
pub mod record_sale;
pub mod reserve_next_sequence;
pub mod transition_status;
pub mod update_batch;

pub use repo_impl::AgentRepositoryImpl;
