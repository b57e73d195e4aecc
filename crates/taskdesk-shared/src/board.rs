use serde::{Deserialize, Serialize};

use crate::draft::TaskEdit;
use crate::view::TaskView;
use crate::{Task, TaskCreate, TaskPatch, TaskStatus};

/// A call against the task API, produced by a board action and executed by
/// whichever transport the front end uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskRequest {
    List,
    Create(TaskCreate),
    Update { id: u64, patch: TaskPatch },
    Delete { id: u64 },
}

impl TaskRequest {
    pub const COLLECTION_PATH: &'static str = "/api/tasks/";

    pub fn method(&self) -> &'static str {
        match self {
            TaskRequest::List => "GET",
            TaskRequest::Create(_) => "POST",
            TaskRequest::Update { .. } => "PATCH",
            TaskRequest::Delete { .. } => "DELETE",
        }
    }

    pub fn path(&self) -> String {
        match self {
            TaskRequest::List | TaskRequest::Create(_) => Self::COLLECTION_PATH.to_string(),
            TaskRequest::Update { id, .. } | TaskRequest::Delete { id } => item_path(*id),
        }
    }

}

pub fn item_path(id: u64) -> String {
    format!("/api/tasks/{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Create,
    Edit,
    ChangeStatus,
    Delete,
}

impl std::fmt::Display for BoardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoardAction::Create => "create",
            BoardAction::Edit => "edit",
            BoardAction::ChangeStatus => "status change",
            BoardAction::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{action} is not offered in the {view} view")]
    NotOffered { view: TaskView, action: BoardAction },
    #[error("task {0} is not on the {1} board")]
    UnknownTask(u64, TaskView),
}

/// In-memory state of one page: the partitioned list plus whatever action is
/// waiting on a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    view: TaskView,
    tasks: Vec<Task>,
    editing: Option<Task>,
    pending_completion: Option<Task>,
    pending_delete: Option<u64>,
}

impl TaskBoard {
    pub fn new(view: TaskView) -> Self {
        Self {
            view,
            tasks: Vec::new(),
            editing: None,
            pending_completion: None,
            pending_delete: None,
        }
    }

    pub fn view(&self) -> TaskView {
        self.view
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replaces the list wholesale with this view's slice of `all`.
    pub fn apply_fetch(&mut self, all: Vec<Task>) {
        self.tasks = self.view.partition(all);
    }

    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    pub fn pending_completion(&self) -> Option<&Task> {
        self.pending_completion.as_ref()
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    pub fn create(&self, create: TaskCreate) -> Result<TaskRequest, BoardError> {
        self.require(BoardAction::Create)?;
        Ok(TaskRequest::Create(create))
    }

    pub fn begin_edit(&mut self, id: u64) -> Result<Task, BoardError> {
        self.require(BoardAction::Edit)?;
        let task = self.lookup(id)?.clone();
        self.editing = Some(task.clone());
        Ok(task)
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    pub fn edit(&mut self, edit: TaskEdit) -> Result<TaskRequest, BoardError> {
        self.require(BoardAction::Edit)?;
        self.lookup(edit.id)?;
        self.editing = None;
        Ok(TaskRequest::Update {
            id: edit.id,
            patch: edit.into_patch(),
        })
    }

    /// `Ok(None)` means the change is staged behind the completion dialog.
    pub fn change_status(
        &mut self,
        id: u64,
        status: TaskStatus,
    ) -> Result<Option<TaskRequest>, BoardError> {
        self.require(BoardAction::ChangeStatus)?;
        let task = self.lookup(id)?.clone();
        if status.is_completed() {
            self.pending_completion = Some(task);
            return Ok(None);
        }
        Ok(Some(TaskRequest::Update {
            id,
            patch: TaskPatch::from_task(&task).with_status(status),
        }))
    }

    pub fn confirm_completion(&mut self) -> Option<TaskRequest> {
        let task = self.pending_completion.take()?;
        Some(TaskRequest::Update {
            id: task.id,
            patch: TaskPatch::from_task(&task).with_status(TaskStatus::Completed),
        })
    }

    pub fn cancel_completion(&mut self) {
        self.pending_completion = None;
    }

    pub fn stage_delete(&mut self, id: u64) -> Result<(), BoardError> {
        self.require(BoardAction::Delete)?;
        self.lookup(id)?;
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn confirm_delete(&mut self) -> Option<TaskRequest> {
        let id = self.pending_delete.take()?;
        Some(TaskRequest::Delete { id })
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    fn require(&self, action: BoardAction) -> Result<(), BoardError> {
        let caps = self.view.capabilities();
        let offered = match action {
            BoardAction::Create => caps.create,
            BoardAction::Edit => caps.edit,
            BoardAction::ChangeStatus => caps.change_status,
            BoardAction::Delete => caps.delete,
        };
        if offered {
            Ok(())
        } else {
            Err(BoardError::NotOffered {
                view: self.view,
                action,
            })
        }
    }

    fn lookup(&self, id: u64) -> Result<&Task, BoardError> {
        self.find(id).ok_or(BoardError::UnknownTask(id, self.view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskPriority;

    fn task(id: u64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: "body".to_string(),
            priority: TaskPriority::Medium,
            status,
        }
    }

    fn active_board() -> TaskBoard {
        let mut board = TaskBoard::new(TaskView::Active);
        board.apply_fetch(vec![
            task(1, TaskStatus::Pending),
            task(2, TaskStatus::Completed),
            task(3, TaskStatus::InProgress),
        ]);
        board
    }

    #[test]
    fn fetch_keeps_only_admitted_tasks() {
        let board = active_board();
        let ids: Vec<u64> = board.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(board.find(2).is_none());
    }

    #[test]
    fn selecting_completed_stages_without_request() {
        let mut board = active_board();
        let request = board
            .change_status(1, TaskStatus::Completed)
            .expect("status change allowed");
        assert_eq!(request, None);
        assert_eq!(board.pending_completion().map(|t| t.id), Some(1));
    }

    #[test]
    fn confirming_completion_submits_full_record() {
        let mut board = active_board();
        board
            .change_status(3, TaskStatus::Completed)
            .expect("status change allowed");
        let request = board.confirm_completion().expect("staged task");
        assert_eq!(
            request,
            TaskRequest::Update {
                id: 3,
                patch: TaskPatch {
                    id: Some(3),
                    title: Some("task 3".to_string()),
                    description: Some("body".to_string()),
                    priority: Some(TaskPriority::Medium),
                    status: Some(TaskStatus::Completed),
                },
            }
        );
        assert!(board.pending_completion().is_none());
        assert_eq!(board.confirm_completion(), None);
    }

    #[test]
    fn cancelling_completion_sends_nothing() {
        let mut board = active_board();
        board
            .change_status(1, TaskStatus::Completed)
            .expect("status change allowed");
        board.cancel_completion();
        assert_eq!(board.confirm_completion(), None);
        assert_eq!(board.find(1).map(|t| t.status), Some(TaskStatus::Pending));
    }

    #[test]
    fn non_terminal_status_submits_immediately() {
        let mut board = active_board();
        let request = board
            .change_status(1, TaskStatus::InProgress)
            .expect("status change allowed")
            .expect("immediate request");
        assert_eq!(request.method(), "PATCH");
        assert_eq!(request.path(), "/api/tasks/1");
        match request {
            TaskRequest::Update { patch, .. } => {
                assert_eq!(patch.status, Some(TaskStatus::InProgress));
            }
            other => panic!("unexpected request: {other:?}"),
        }
        assert!(board.pending_completion().is_none());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut board = active_board();
        board.stage_delete(3).expect("task on board");
        assert_eq!(board.pending_delete(), Some(3));
        assert_eq!(board.confirm_delete(), Some(TaskRequest::Delete { id: 3 }));
        assert_eq!(board.pending_delete(), None);

        board.stage_delete(1).expect("task on board");
        board.cancel_delete();
        assert_eq!(board.confirm_delete(), None);
    }

    #[test]
    fn completed_board_only_deletes() {
        let mut board = TaskBoard::new(TaskView::Completed);
        board.apply_fetch(vec![
            task(1, TaskStatus::Pending),
            task(7, TaskStatus::Completed),
        ]);
        assert_eq!(board.len(), 1);

        assert!(matches!(
            board.change_status(7, TaskStatus::Pending),
            Err(BoardError::NotOffered {
                action: BoardAction::ChangeStatus,
                ..
            })
        ));
        assert!(matches!(
            board.begin_edit(7),
            Err(BoardError::NotOffered { .. })
        ));
        board.stage_delete(7).expect("delete offered");
        assert_eq!(board.confirm_delete(), Some(TaskRequest::Delete { id: 7 }));
    }

    #[test]
    fn completed_tasks_are_not_editable_from_active_board() {
        let mut board = active_board();
        assert_eq!(
            board.begin_edit(2),
            Err(BoardError::UnknownTask(2, TaskView::Active))
        );
        assert_eq!(
            board.change_status(2, TaskStatus::Pending),
            Err(BoardError::UnknownTask(2, TaskView::Active))
        );
    }

    #[test]
    fn edit_request_omits_status() {
        let mut board = active_board();
        let target = board.begin_edit(1).expect("editable");
        assert_eq!(board.editing().map(|t| t.id), Some(1));

        let request = board
            .edit(TaskEdit {
                id: target.id,
                title: target.title,
                description: target.description,
                priority: TaskPriority::High,
            })
            .expect("edit allowed");
        assert!(board.editing().is_none());
        match request {
            TaskRequest::Update { id, patch } => {
                assert_eq!(id, 1);
                assert_eq!(patch.priority, Some(TaskPriority::High));
                assert_eq!(patch.status, None);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn create_goes_to_collection_path() {
        let board = active_board();
        let request = board
            .create(TaskCreate {
                title: "A".to_string(),
                description: "B".to_string(),
                priority: TaskPriority::High,
                status: TaskStatus::Pending,
            })
            .expect("create offered");
        assert_eq!(request.method(), "POST");
        assert_eq!(request.path(), "/api/tasks/");
    }
}
