use crate::task::task::Task;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The full persisted task collection
///
/// Vec is used as the primary storage: it keeps insertion order, which gives
/// predictable listing output and a stable serialized file. The id counter is
/// persisted alongside the tasks so identifiers are never reused after a
/// deletion.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskList {
    /// Highest id handed out so far
    task_counter: u32,

    /// All tasks in insertion order
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create a new empty TaskList
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unique task id
    pub fn allocate_id(&mut self) -> u32 {
        self.task_counter += 1;
        self.task_counter
    }

    /// All tasks in storage order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task to the collection
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Find a task by its id and return a mutable reference
    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove every task with the given id
    ///
    /// Returns the number of tasks removed (at most one under normal
    /// operation). Relative order of the remaining tasks is preserved.
    pub fn remove_by_id(&mut self, id: u32) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        before - self.tasks.len()
    }

    /// Active tasks due exactly on `date`, in storage order
    ///
    /// Completed tasks and tasks without a due date are never returned.
    pub fn due_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_due_on(date)).collect()
    }

    /// Shift the due date of every active task due on `date` by a signed
    /// minute offset
    ///
    /// Each matching due date is reinterpreted as a date-time at local
    /// midnight, the offset is added, and the result is truncated back to a
    /// calendar date. Offsets smaller than a day in magnitude therefore may
    /// leave a date unchanged; negative offsets cross midnight into the
    /// previous day. Returns the number of tasks updated.
    pub fn shift_due(&mut self, date: NaiveDate, minutes: i64) -> usize {
        let Some(delta) = Duration::try_minutes(minutes) else {
            return 0;
        };

        let mut updated = 0;
        for task in self.tasks.iter_mut().filter(|t| t.is_due_on(date)) {
            let midnight = date.and_time(NaiveTime::MIN);
            if let Some(shifted) = midnight.checked_add_signed(delta) {
                task.due_date = Some(shifted.date());
                updated += 1;
            }
        }
        updated
    }

    /// Parse a task collection from its JSON encoding
    ///
    /// Accepts the current object layout (`task_counter` + `tasks`) as well
    /// as the legacy layout, a bare array of task records. For a legacy file
    /// the counter is re-seeded from the highest stored id.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        match serde_json::from_str::<TaskList>(content) {
            Ok(list) => Ok(list),
            Err(_) => {
                let tasks: Vec<Task> = serde_json::from_str(content)?;
                let task_counter = tasks.iter().map(|t| t.id).max().unwrap_or(0);
                Ok(TaskList {
                    task_counter,
                    tasks,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task_due(id: u32, description: &str, due: Option<NaiveDate>) -> Task {
        Task::new(id, description, due)
    }

    #[test]
    fn test_allocate_id_is_sequential() {
        let mut list = TaskList::new();
        assert_eq!(list.allocate_id(), 1);
        assert_eq!(list.allocate_id(), 2);
        assert_eq!(list.allocate_id(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut list = TaskList::new();
        for _ in 0..3 {
            let id = list.allocate_id();
            list.add(task_due(id, "task", None));
        }

        // Remove the middle task; the next id must still advance past 3.
        assert_eq!(list.remove_by_id(2), 1);
        assert_eq!(list.allocate_id(), 4);
    }

    #[test]
    fn test_remove_by_id_preserves_relative_order() {
        let mut list = TaskList::new();
        for i in 1..=4 {
            list.add(task_due(i, &format!("task {i}"), None));
        }

        assert_eq!(list.remove_by_id(2), 1);
        let remaining: Vec<u32> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_by_id_missing_is_noop() {
        let mut list = TaskList::new();
        list.add(task_due(1, "only task", None));
        assert_eq!(list.remove_by_id(99), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_due_on_excludes_completed_and_dateless() {
        let target = date(2024, 6, 1);
        let mut list = TaskList::new();
        list.add(task_due(1, "active match", Some(target)));
        list.add(task_due(2, "other date", Some(date(2024, 6, 2))));
        list.add(task_due(3, "no date", None));
        let mut done = task_due(4, "completed match", Some(target));
        done.completed = true;
        list.add(done);

        let due = list.due_on(target);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 1);
    }

    #[test]
    fn test_shift_due_zero_minutes_unchanged() {
        let target = date(2024, 6, 1);
        let mut list = TaskList::new();
        list.add(task_due(1, "task", Some(target)));

        assert_eq!(list.shift_due(target, 0), 1);
        assert_eq!(list.tasks()[0].due_date, Some(target));
    }

    #[test]
    fn test_shift_due_truncates_sub_day_offsets() {
        let target = date(2024, 6, 1);
        let mut list = TaskList::new();
        list.add(task_due(1, "task", Some(target)));

        // 1439 minutes forward never crosses midnight.
        assert_eq!(list.shift_due(target, 1439), 1);
        assert_eq!(list.tasks()[0].due_date, Some(target));
    }

    #[test]
    fn test_shift_due_full_day_forward() {
        let target = date(2024, 6, 1);
        let mut list = TaskList::new();
        list.add(task_due(1, "task", Some(target)));

        assert_eq!(list.shift_due(target, 1440), 1);
        assert_eq!(list.tasks()[0].due_date, Some(date(2024, 6, 2)));
    }

    #[test]
    fn test_shift_due_negative_crosses_midnight() {
        let target = date(2024, 6, 1);
        let mut list = TaskList::new();
        list.add(task_due(1, "task", Some(target)));

        // Midnight minus one minute lands on the previous day.
        assert_eq!(list.shift_due(target, -1), 1);
        assert_eq!(list.tasks()[0].due_date, Some(date(2024, 5, 31)));
    }

    #[test]
    fn test_shift_due_skips_completed_and_other_dates() {
        let target = date(2024, 6, 1);
        let mut list = TaskList::new();
        let mut done = task_due(1, "done", Some(target));
        done.completed = true;
        list.add(done);
        list.add(task_due(2, "elsewhere", Some(date(2024, 7, 1))));

        assert_eq!(list.shift_due(target, 1440), 0);
        assert_eq!(list.tasks()[0].due_date, Some(target));
        assert_eq!(list.tasks()[1].due_date, Some(date(2024, 7, 1)));
    }

    #[test]
    fn test_from_json_str_object_layout() {
        let json = r#"{
            "task_counter": 5,
            "tasks": [
                {"id": 5, "description": "Buy milk", "due_date": null,
                 "completed": false, "created_at": "2024-06-01 09:30:00"}
            ]
        }"#;

        let mut list = TaskList::from_json_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].description, "Buy milk");
        assert_eq!(list.allocate_id(), 6);
    }

    #[test]
    fn test_from_json_str_legacy_array_reseeds_counter() {
        let json = r#"[
            {"id": 1, "description": "first", "due_date": "2024-01-15",
             "completed": false, "created_at": "2024-01-01 08:00:00"},
            {"id": 3, "description": "third", "due_date": null,
             "completed": true, "created_at": "2024-01-02 08:00:00"}
        ]"#;

        let mut list = TaskList::from_json_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.tasks()[0].due_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        // Counter picks up after the highest stored id.
        assert_eq!(list.allocate_id(), 4);
    }

    #[test]
    fn test_serialized_list_omits_nothing() {
        let mut list = TaskList::new();
        let id = list.allocate_id();
        list.add(task_due(id, "round trip", Some(date(2024, 2, 29))));

        let json = serde_json::to_string(&list).unwrap();
        let loaded = TaskList::from_json_str(&json).unwrap();
        assert_eq!(loaded.tasks(), list.tasks());
    }
}
