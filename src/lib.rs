//! Personal task-tracking library
//!
//! This library implements a small to-do list with optional due dates,
//! persisted to a single local JSON file.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Operations Layer**: [`TodoStore`] - loads, mutates, and saves the
//!   collection, one operation per invocation
//! - **Domain Layer**: `task` module - the task record and ordered collection
//! - **Persistence Layer**: `storage` module - file-based JSON storage
//!
//! # Example
//!
//! ```no_run
//! use todo_cli::TodoStore;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let store = TodoStore::new("todo.json");
//!     let task = store.add("Buy milk", Some("tomorrow"))?;
//!     println!("created task #{}", task.id);
//!     Ok(())
//! }
//! ```

pub mod dates;
mod error;
pub mod formatting;
mod storage;
mod task;

use chrono::{Days, NaiveDate};

// Re-export commonly used types
pub use error::TodoError;
pub use storage::Storage;
pub use task::{Task, TaskList, local_date_today, local_datetime_now};

/// Result of a reschedule operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescheduleOutcome {
    /// The resolved target date the tasks were matched against
    pub date: NaiveDate,
    /// How many tasks had their due date shifted
    pub updated: usize,
}

/// The task store: CRUD operations over the persisted task collection
///
/// Every operation loads the entire collection from disk, applies one
/// mutation or query, and writes the collection back. There is no in-memory
/// session state; the store only holds the storage location, which is
/// injected at construction.
pub struct TodoStore {
    storage: Storage,
}

impl TodoStore {
    /// Create a store backed by the given file path
    ///
    /// The file does not need to exist yet; it is created on the first save.
    pub fn new(file_path: impl AsRef<std::path::Path>) -> Self {
        Self {
            storage: Storage::new(file_path),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Add a new task
    ///
    /// The due date token, when given, is normalized first; an invalid token
    /// aborts the operation before anything is written. The new task gets
    /// the next id from the persisted counter and is stamped with the
    /// current local time.
    ///
    /// # Returns
    /// The created task
    pub fn add(&self, description: &str, due_token: Option<&str>) -> Result<Task, TodoError> {
        if description.trim().is_empty() {
            return Err(TodoError::EmptyDescription);
        }
        let due_date = due_token.map(dates::normalize).transpose()?;

        let mut list = self.storage.load();
        let id = list.allocate_id();
        let task = Task::new(id, description, due_date);
        list.add(task.clone());
        self.storage.save(&list)?;
        Ok(task)
    }

    /// All tasks in storage order, unfiltered
    pub fn list_all(&self) -> Vec<Task> {
        self.storage.load().tasks().to_vec()
    }

    /// Mark the task with the given id as completed
    ///
    /// # Returns
    /// `true` if a task was found (and the store saved), `false` otherwise.
    /// Completing an already-completed task is a successful no-op.
    pub fn complete(&self, id: u32) -> Result<bool, TodoError> {
        let mut list = self.storage.load();
        match list.find_by_id_mut(id) {
            Some(found) => {
                found.completed = true;
                self.storage.save(&list)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the task with the given id
    ///
    /// # Returns
    /// `true` if at least one task was removed, `false` if the id was not
    /// found (nothing is written in that case).
    pub fn delete(&self, id: u32) -> Result<bool, TodoError> {
        let mut list = self.storage.load();
        if list.remove_by_id(id) > 0 {
            self.storage.save(&list)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Active tasks due exactly on the given date
    ///
    /// Completed tasks and tasks without a due date are never returned.
    pub fn filter_by_date(&self, date: NaiveDate) -> Vec<Task> {
        self.storage
            .load()
            .due_on(date)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Active tasks due today, with the resolved date for display
    pub fn show_today(&self) -> (NaiveDate, Vec<Task>) {
        let date = local_date_today();
        (date, self.filter_by_date(date))
    }

    /// Active tasks due tomorrow, with the resolved date for display
    pub fn show_tomorrow(&self) -> (NaiveDate, Vec<Task>) {
        let date = local_date_today()
            .checked_add_days(Days::new(1))
            .unwrap_or_else(local_date_today);
        (date, self.filter_by_date(date))
    }

    /// Shift every active task due on the resolved date by a signed minute
    /// offset
    ///
    /// The token is normalized like any other date argument; the offset must
    /// parse as an integer. Each matching due date is taken at local
    /// midnight, shifted, and truncated back to a calendar date, so offsets
    /// under a day in magnitude may leave it unchanged. The store is only
    /// written when at least one task matched.
    pub fn reschedule(
        &self,
        date_token: &str,
        minutes_raw: &str,
    ) -> Result<RescheduleOutcome, TodoError> {
        let date = dates::normalize(date_token)?;
        let minutes = dates::parse_minutes(minutes_raw)?;

        let mut list = self.storage.load();
        let updated = list.shift_due(date, minutes);
        if updated > 0 {
            self.storage.save(&list)?;
        }
        Ok(RescheduleOutcome { date, updated })
    }
}
