use crate::{
  Task,
  TaskCreate,
  TaskPatch,
  TaskPriority,
  TaskStatus
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum DraftError {
  #[error("Title is required.")]
  MissingTitle,
  #[error("Description is required.")]
  MissingDescription,
  #[error(
    "New tasks cannot start as \
     completed."
  )]
  CompletedOnCreate
}

/// Transient input of the create
/// dialog. Reset to defaults after a
/// successful submit and on close.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct CreateTaskDraft {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub status:      TaskStatus
}

impl CreateTaskDraft {
  pub fn new() -> Self {
    Self::default()
  }

  /// Statuses a new task may start in.
  pub fn status_options()
  -> [TaskStatus; 2] {
    [
      TaskStatus::Pending,
      TaskStatus::InProgress
    ]
  }

  pub fn validate(
    &self
  ) -> Result<(), DraftError> {
    check_required(
      &self.title,
      &self.description
    )?;
    if self.status.is_completed() {
      return Err(
        DraftError::CompletedOnCreate
      );
    }
    Ok(())
  }

  /// Builds the creation payload and
  /// clears the draft. A rejected draft
  /// is left as it was.
  pub fn submit(
    &mut self
  ) -> Result<TaskCreate, DraftError> {
    self.validate()?;
    let create = TaskCreate {
      title:       self
        .title
        .trim()
        .to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      priority:    self.priority,
      status:      self.status
    };
    self.reset();
    Ok(create)
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }
}

/// Field edit produced by the edit
/// dialog. Never carries `status`.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskEdit {
  pub id:          u64,
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority
}

impl TaskEdit {
  pub fn into_patch(self) -> TaskPatch {
    TaskPatch {
      id:          Some(self.id),
      title:       Some(self.title),
      description: Some(
        self.description
      ),
      priority:    Some(self.priority),
      status:      None
    }
  }
}

/// Edit dialog input, mirrored from the
/// target task whenever the target
/// changes.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct EditTaskDraft {
  target:          Option<Task>,
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority
}

impl EditTaskDraft {
  pub fn for_task(task: Task) -> Self {
    let mut draft = Self::default();
    draft.set_target(Some(task));
    draft
  }

  pub fn target(&self) -> Option<&Task> {
    self.target.as_ref()
  }

  pub fn set_target(
    &mut self,
    target: Option<Task>
  ) {
    if self.target == target {
      return;
    }
    match &target {
      | Some(task) => {
        self.title = task.title.clone();
        self.description =
          task.description.clone();
        self.priority = task.priority;
      }
      | None => {
        self.title.clear();
        self.description.clear();
        self.priority =
          TaskPriority::default();
      }
    }
    self.target = target;
  }

  /// `Ok(None)` when there is no target:
  /// the dialog has nothing to save.
  pub fn submit(
    &self
  ) -> Result<Option<TaskEdit>, DraftError>
  {
    let Some(task) = &self.target
    else {
      return Ok(None);
    };
    check_required(
      &self.title,
      &self.description
    )?;
    Ok(Some(TaskEdit {
      id:          task.id,
      title:       self
        .title
        .trim()
        .to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      priority:    self.priority
    }))
  }
}

fn check_required(
  title: &str,
  description: &str
) -> Result<(), DraftError> {
  if title.trim().is_empty() {
    return Err(
      DraftError::MissingTitle
    );
  }
  if description.trim().is_empty() {
    return Err(
      DraftError::MissingDescription
    );
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn existing() -> Task {
    Task {
      id:          12,
      title:       "Old title".to_string(),
      description: "Old body".to_string(),
      priority:    TaskPriority::Low,
      status:      TaskStatus::InProgress
    }
  }

  #[test]
  fn create_draft_defaults_to_low_pending() {
    let draft = CreateTaskDraft::new();
    assert_eq!(
      draft.priority,
      TaskPriority::Low
    );
    assert_eq!(
      draft.status,
      TaskStatus::Pending
    );
  }

  #[test]
  fn create_submit_resets_to_defaults() {
    let mut draft = CreateTaskDraft {
      title:       "  A ".to_string(),
      description: "B".to_string(),
      priority:    TaskPriority::High,
      status:      TaskStatus::InProgress
    };
    let create =
      draft.submit().expect("valid draft");
    assert_eq!(create.title, "A");
    assert_eq!(
      create.priority,
      TaskPriority::High
    );
    assert_eq!(
      draft,
      CreateTaskDraft::default()
    );
  }

  #[test]
  fn create_rejects_blank_fields_and_keeps_input() {
    let mut draft = CreateTaskDraft {
      title: "   ".to_string(),
      description: "kept".to_string(),
      ..CreateTaskDraft::default()
    };
    assert_eq!(
      draft.submit(),
      Err(DraftError::MissingTitle)
    );
    assert_eq!(draft.description, "kept");

    draft.title = "T".to_string();
    draft.description.clear();
    assert_eq!(
      draft.submit(),
      Err(DraftError::MissingDescription)
    );
  }

  #[test]
  fn create_rejects_completed_start() {
    let mut draft = CreateTaskDraft {
      title: "T".to_string(),
      description: "D".to_string(),
      status: TaskStatus::Completed,
      ..CreateTaskDraft::default()
    };
    assert_eq!(
      draft.submit(),
      Err(DraftError::CompletedOnCreate)
    );
  }

  #[test]
  fn edit_draft_mirrors_target_fields() {
    let draft =
      EditTaskDraft::for_task(existing());
    assert_eq!(draft.title, "Old title");
    assert_eq!(draft.description, "Old body");
    assert_eq!(
      draft.priority,
      TaskPriority::Low
    );
  }

  #[test]
  fn edit_draft_keeps_input_while_target_unchanged() {
    let mut draft =
      EditTaskDraft::for_task(existing());
    draft.title = "Typed".to_string();
    draft.set_target(Some(existing()));
    assert_eq!(draft.title, "Typed");

    let mut other = existing();
    other.id = 13;
    other.title = "Other".to_string();
    draft.set_target(Some(other));
    assert_eq!(draft.title, "Other");
  }

  #[test]
  fn edit_without_target_is_noop() {
    let draft = EditTaskDraft::default();
    assert_eq!(draft.submit(), Ok(None));
  }

  #[test]
  fn edit_patch_leaves_status_out() {
    let mut draft =
      EditTaskDraft::for_task(existing());
    draft.priority = TaskPriority::High;
    let edit = draft
      .submit()
      .expect("valid edit")
      .expect("target set");
    let patch = edit.into_patch();
    assert_eq!(patch.id, Some(12));
    assert_eq!(
      patch.priority,
      Some(TaskPriority::High)
    );
    assert_eq!(patch.status, None);
  }

  #[test]
  fn edit_rejects_blank_description() {
    let mut draft =
      EditTaskDraft::for_task(existing());
    draft.description = " ".to_string();
    assert_eq!(
      draft.submit(),
      Err(DraftError::MissingDescription)
    );
  }
}
