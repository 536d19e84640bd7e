//! Toggleable task checklists for the dashboard and the game page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub points: u32,
    pub completed: bool,
}

impl Task {
    fn new(id: u32, title: &str, points: u32, completed: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            points,
            completed,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Farm chores shown on the dashboard.
    pub fn dashboard_sample() -> Self {
        Self::new(vec![
            Task::new(1, "Apply fertilizer to corn field", 10, false),
            Task::new(2, "Check irrigation system", 5, true),
            Task::new(3, "Monitor wheat growth", 8, false),
            Task::new(4, "Update finance tracker", 7, false),
        ])
    }

    /// Daily quests shown on the game page.
    pub fn daily_sample() -> Self {
        Self::new(vec![
            Task::new(1, "Check crop health", 10, true),
            Task::new(2, "Water vegetables", 15, false),
            Task::new(3, "Update finance tracker", 20, false),
        ])
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Flip a task's completion. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u32) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Rounded share of completed tasks; an empty list counts as 0%.
    pub fn completion_percent(&self) -> u32 {
        if self.tasks.is_empty() {
            return 0;
        }
        ((self.completed() as f64 / self.total() as f64) * 100.0).round() as u32
    }

    pub fn earned_points(&self) -> u32 {
        self.tasks.iter().filter(|t| t.completed).map(|t| t.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_completion() {
        let mut list = TaskList::dashboard_sample();
        assert_eq!(list.completed(), 1);
        assert_eq!(list.total(), 4);
        assert_eq!(list.completion_percent(), 25);

        list.toggle(1);
        assert_eq!(list.completion_percent(), 50);
        assert_eq!(list.earned_points(), 15);

        list.toggle(1);
        assert_eq!(list.completion_percent(), 25);
    }

    #[test]
    fn test_rounding() {
        let mut list = TaskList::daily_sample();
        assert_eq!(list.completion_percent(), 33);
        list.toggle(2);
        assert_eq!(list.completion_percent(), 67);
    }

    #[test]
    fn test_unknown_id_and_empty_list() {
        let mut list = TaskList::dashboard_sample();
        let before = list.clone();
        list.toggle(99);
        assert_eq!(list, before);

        assert_eq!(TaskList::default().completion_percent(), 0);
    }
}
