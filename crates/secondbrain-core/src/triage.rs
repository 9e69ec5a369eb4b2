//! Triage ordering for the today queue
//!
//! Overdue tasks come first, then tasks are ranked high → medium → low.
//! The sort is stable, so tasks with equal keys keep their storage order.

use crate::{Priority, Task};

/// Sort rank for a priority; lower ranks are shown first
pub fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

/// Order tasks for the today queue without touching the input slice
pub fn triage_order(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    // `sort_by_key` is stable; `false < true` puts overdue tasks first
    ordered.sort_by_key(|task| (!task.is_overdue(), priority_rank(task.priority)));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, due: &str, priority: Priority) -> Task {
        Task::new(id, 1, format!("Task {}", id), due, priority)
    }

    fn ids(tasks: &[&Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_overdue_before_priority() {
        let tasks = vec![
            task(1, "Today", Priority::High),
            task(2, "overdue", Priority::Low),
            task(3, "Tomorrow", Priority::Medium),
        ];
        assert_eq!(ids(&triage_order(&tasks)), vec![2, 1, 3]);
    }

    #[test]
    fn test_priority_within_bucket() {
        let tasks = vec![
            task(1, "Overdue", Priority::Low),
            task(2, "Overdue", Priority::High),
            task(3, "Today", Priority::Low),
            task(4, "Today", Priority::Medium),
            task(5, "Today", Priority::High),
        ];
        assert_eq!(ids(&triage_order(&tasks)), vec![2, 1, 5, 4, 3]);
    }

    #[test]
    fn test_equal_keys_keep_storage_order() {
        let tasks = vec![
            task(4, "Today", Priority::Medium),
            task(1, "Tomorrow", Priority::Medium),
            task(9, "Today · evening", Priority::Medium),
            task(2, "Was overdue", Priority::Medium),
            task(7, "OVERDUE", Priority::Medium),
        ];
        assert_eq!(ids(&triage_order(&tasks)), vec![2, 7, 4, 1, 9]);
    }

    #[test]
    fn test_idempotent_and_non_mutating() {
        let tasks = vec![
            task(1, "Today", Priority::Low),
            task(2, "Overdue", Priority::Medium),
            task(3, "Today", Priority::High),
        ];
        let before = tasks.clone();

        let first = ids(&triage_order(&tasks));
        let second = ids(&triage_order(&tasks));

        assert_eq!(first, second);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_empty_input() {
        assert!(triage_order(&[]).is_empty());
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(priority_rank(Priority::High) < priority_rank(Priority::Medium));
        assert!(priority_rank(Priority::Medium) < priority_rank(Priority::Low));
    }
}
