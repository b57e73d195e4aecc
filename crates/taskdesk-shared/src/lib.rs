pub mod board;
pub mod draft;
pub mod view;

use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

pub use board::{
  BoardAction,
  BoardError,
  TaskBoard,
  TaskRequest
};
pub use draft::{
  CreateTaskDraft,
  DraftError,
  EditTaskDraft,
  TaskEdit
};
pub use view::{
  TaskView,
  ViewCapabilities
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
  #[default]
  Pending,
  InProgress,
  Completed
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
  #[default]
  Low,
  Medium,
  High
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:          u64,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  pub priority:    TaskPriority,
  pub status:      TaskStatus
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskCreate {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub status:      TaskStatus
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskPatch {
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub id:          Option<u64>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub title:       Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub priority:    Option<TaskPriority>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub status:      Option<TaskStatus>
}

impl TaskPatch {
  /// Full-record replacement carrying
  /// every field of `task`.
  pub fn from_task(
    task: &Task
  ) -> Self {
    Self {
      id:          Some(task.id),
      title:       Some(
        task.title.clone()
      ),
      description: Some(
        task.description.clone()
      ),
      priority:    Some(task.priority),
      status:      Some(task.status)
    }
  }

  pub fn with_status(
    mut self,
    status: TaskStatus
  ) -> Self {
    self.status = Some(status);
    self
  }
}

impl TaskStatus {
  pub const ALL: [TaskStatus; 3] = [
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Completed
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | TaskStatus::Pending => {
        "pending"
      }
      | TaskStatus::InProgress => {
        "in_progress"
      }
      | TaskStatus::Completed => {
        "completed"
      }
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | TaskStatus::Pending => {
        "Pending"
      }
      | TaskStatus::InProgress => {
        "In Progress"
      }
      | TaskStatus::Completed => {
        "Completed"
      }
    }
  }

  pub fn is_completed(self) -> bool {
    self == TaskStatus::Completed
  }
}

impl TaskPriority {
  pub const ALL: [TaskPriority; 3] = [
    TaskPriority::Low,
    TaskPriority::Medium,
    TaskPriority::High
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | TaskPriority::Low => "low",
      | TaskPriority::Medium => {
        "medium"
      }
      | TaskPriority::High => "high"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | TaskPriority::Low => "Low",
      | TaskPriority::Medium => {
        "Medium"
      }
      | TaskPriority::High => "High"
    }
  }
}

impl fmt::Display for TaskStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl fmt::Display for TaskPriority {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  thiserror::Error,
)]
#[error("unknown {kind}: {value}")]
pub struct ParseKeyError {
  pub kind:  &'static str,
  pub value: String
}

impl FromStr for TaskStatus {
  type Err = ParseKeyError;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let key = s
      .trim()
      .to_ascii_lowercase()
      .replace(['-', ' '], "_");
    TaskStatus::ALL
      .into_iter()
      .find(|status| {
        status.as_key() == key
      })
      .ok_or_else(|| ParseKeyError {
        kind:  "status",
        value: s.to_string()
      })
  }
}

impl FromStr for TaskPriority {
  type Err = ParseKeyError;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let key =
      s.trim().to_ascii_lowercase();
    TaskPriority::ALL
      .into_iter()
      .find(|priority| {
        priority.as_key() == key
      })
      .ok_or_else(|| ParseKeyError {
        kind:  "priority",
        value: s.to_string()
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Task {
    Task {
      id:          3,
      title:       "Write report"
        .to_string(),
      description: "Quarterly numbers"
        .to_string(),
      priority:    TaskPriority::Medium,
      status:      TaskStatus::InProgress
    }
  }

  #[test]
  fn task_decodes_api_payload() {
    let raw = r#"{"id":7,"title":"A","description":"B","priority":"high","status":"in_progress"}"#;
    let task: Task =
      serde_json::from_str(raw)
        .expect("decode task");
    assert_eq!(task.id, 7);
    assert_eq!(
      task.priority,
      TaskPriority::High
    );
    assert_eq!(
      task.status,
      TaskStatus::InProgress
    );
  }

  #[test]
  fn create_payload_never_carries_id() {
    let create = TaskCreate {
      title:       "A".to_string(),
      description: "B".to_string(),
      priority:    TaskPriority::High,
      status:      TaskStatus::Pending
    };
    let value =
      serde_json::to_value(&create)
        .expect("encode create");
    assert!(value.get("id").is_none());
    assert_eq!(value["priority"], "high");
    assert_eq!(value["status"], "pending");
  }

  #[test]
  fn patch_skips_absent_fields() {
    let patch = TaskPatch {
      id: Some(3),
      priority: Some(
        TaskPriority::Low
      ),
      ..TaskPatch::default()
    };
    let value =
      serde_json::to_value(&patch)
        .expect("encode patch");
    let object = value
      .as_object()
      .expect("patch is an object");
    assert_eq!(object.len(), 2);
    assert!(!object.contains_key("status"));
  }

  #[test]
  fn full_patch_carries_new_status() {
    let patch =
      TaskPatch::from_task(&sample())
        .with_status(
          TaskStatus::Completed
        );
    assert_eq!(patch.id, Some(3));
    assert_eq!(
      patch.title.as_deref(),
      Some("Write report")
    );
    assert_eq!(
      patch.status,
      Some(TaskStatus::Completed)
    );
  }

  #[test]
  fn status_parses_loose_keys() {
    assert_eq!(
      "In-Progress"
        .parse::<TaskStatus>(),
      Ok(TaskStatus::InProgress)
    );
    assert_eq!(
      "completed".parse::<TaskStatus>(),
      Ok(TaskStatus::Completed)
    );
    assert!(
      "done"
        .parse::<TaskStatus>()
        .is_err()
    );
    assert_eq!(
      " HIGH ".parse::<TaskPriority>(),
      Ok(TaskPriority::High)
    );
  }
}
