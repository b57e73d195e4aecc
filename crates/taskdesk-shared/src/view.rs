use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

use crate::Task;

/// Which slice of the task collection a
/// page shows. Membership is a pure
/// function of `status`.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
  Active,
  Completed
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct ViewCapabilities {
  pub create:        bool,
  pub edit:          bool,
  pub change_status: bool,
  pub delete:        bool
}

impl TaskView {
  pub fn admits(
    self,
    task: &Task
  ) -> bool {
    match self {
      | TaskView::Active => {
        !task.status.is_completed()
      }
      | TaskView::Completed => {
        task.status.is_completed()
      }
    }
  }

  /// Keeps admitted tasks in the order
  /// the API returned them.
  pub fn partition(
    self,
    tasks: impl IntoIterator<Item = Task>
  ) -> Vec<Task> {
    tasks
      .into_iter()
      .filter(|task| self.admits(task))
      .collect()
  }

  pub fn capabilities(
    self
  ) -> ViewCapabilities {
    match self {
      | TaskView::Active => {
        ViewCapabilities {
          create:        true,
          edit:          true,
          change_status: true,
          delete:        true
        }
      }
      | TaskView::Completed => {
        ViewCapabilities {
          create:        false,
          edit:          false,
          change_status: false,
          delete:        true
        }
      }
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      | TaskView::Active => "Tasks",
      | TaskView::Completed => {
        "Completed Tasks"
      }
    }
  }

  pub fn empty_message(
    self
  ) -> &'static str {
    match self {
      | TaskView::Active => {
        "No tasks yet"
      }
      | TaskView::Completed => {
        "No Current Task/s Completed"
      }
    }
  }
}

impl fmt::Display for TaskView {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | TaskView::Active => {
        f.write_str("active")
      }
      | TaskView::Completed => {
        f.write_str("completed")
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    TaskPriority,
    TaskStatus
  };

  fn task(
    id: u64,
    status: TaskStatus
  ) -> Task {
    Task {
      id,
      title: format!("task {id}"),
      description: "body".to_string(),
      priority: TaskPriority::Low,
      status
    }
  }

  fn mixed() -> Vec<Task> {
    vec![
      task(4, TaskStatus::Completed),
      task(1, TaskStatus::Pending),
      task(9, TaskStatus::InProgress),
      task(2, TaskStatus::Completed),
      task(5, TaskStatus::Pending),
    ]
  }

  #[test]
  fn partitions_are_disjoint_and_cover_collection() {
    let all = mixed();
    let active = TaskView::Active
      .partition(all.clone());
    let completed = TaskView::Completed
      .partition(all.clone());

    for task in &active {
      assert!(!completed.contains(task));
    }
    assert_eq!(
      active.len() + completed.len(),
      all.len()
    );
    for task in &all {
      assert!(
        active.contains(task)
          ^ completed.contains(task)
      );
    }
  }

  #[test]
  fn partition_preserves_api_order() {
    let ids: Vec<u64> = TaskView::Active
      .partition(mixed())
      .into_iter()
      .map(|task| task.id)
      .collect();
    assert_eq!(ids, vec![1, 9, 5]);

    let ids: Vec<u64> =
      TaskView::Completed
        .partition(mixed())
        .into_iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(ids, vec![4, 2]);
  }

  #[test]
  fn completed_view_only_offers_delete() {
    let caps =
      TaskView::Completed.capabilities();
    assert!(caps.delete);
    assert!(!caps.create);
    assert!(!caps.edit);
    assert!(!caps.change_status);
    assert!(
      TaskView::Active
        .capabilities()
        .change_status
    );
  }
}
