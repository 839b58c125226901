//! Task domain model
//!
//! This module contains the core task data structures:
//! - `task`: the `Task` record and its timestamp encoding
//! - `task_list`: the ordered, persisted task collection

mod task;
mod task_list;

pub use task::{Task, local_date_today, local_datetime_now};
pub use task_list::TaskList;

pub(crate) use task::timestamp;
