//! Entity structs for the transaction records carried in a request payload.
//!
//! Field names follow the dashboard's storage shape (`project_id`,
//! `task_name`, `loan_special_clause_deadline`, ...) so payloads can be fed
//! in unchanged. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema`.

mod contact;
mod project;
mod task;

pub use contact::Contact;
pub use project::Project;
pub use task::Task;
