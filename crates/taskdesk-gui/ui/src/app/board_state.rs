use std::rc::Rc;

use taskdesk_shared::{
  Task,
  TaskBoard,
  TaskStatus,
  TaskView
};
use yew::Reducible;

/// Page state: the shared board, whether
/// the create dialog is open and the
/// refetch tick.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
  pub board:    TaskBoard,
  pub creating: bool,
  /// Bumped when a staged completion is
  /// cancelled or a request fails so rows
  /// remount and their status selectors
  /// snap back.
  pub revision: u64,
  /// Each accepted request bumps this
  /// once; the page refetches on change.
  pub tick:     u64
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoardMsg {
  Fetched(Vec<Task>),
  Refresh,
  RequestFailed,
  OpenCreate,
  CloseCreate,
  BeginEdit(u64),
  EndEdit,
  StageCompletion(u64),
  CancelCompletion,
  CompletionSent,
  StageDelete(u64),
  CancelDelete,
  DeleteSent
}

impl BoardState {
  pub fn new(view: TaskView) -> Self {
    Self {
      board:    TaskBoard::new(view),
      creating: false,
      revision: 0,
      tick:     0
    }
  }
}

impl Reducible for BoardState {
  type Action = BoardMsg;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    let view = next.board.view();

    let outcome = match action {
      | BoardMsg::Fetched(all) => {
        next.board.apply_fetch(all);
        Ok(())
      }
      | BoardMsg::Refresh => {
        next.tick =
          next.tick.wrapping_add(1);
        Ok(())
      }
      | BoardMsg::RequestFailed => {
        next.revision =
          next.revision.wrapping_add(1);
        Ok(())
      }
      | BoardMsg::OpenCreate => {
        next.creating =
          view.capabilities().create;
        Ok(())
      }
      | BoardMsg::CloseCreate => {
        next.creating = false;
        Ok(())
      }
      | BoardMsg::BeginEdit(id) => {
        next.board.begin_edit(id).map(|_| ())
      }
      | BoardMsg::EndEdit => {
        next.board.end_edit();
        Ok(())
      }
      | BoardMsg::StageCompletion(id) => {
        next
          .board
          .change_status(
            id,
            TaskStatus::Completed
          )
          .map(|_| ())
      }
      | BoardMsg::CancelCompletion => {
        next.board.cancel_completion();
        next.revision =
          next.revision.wrapping_add(1);
        Ok(())
      }
      | BoardMsg::CompletionSent => {
        next.board.confirm_completion();
        Ok(())
      }
      | BoardMsg::StageDelete(id) => {
        next.board.stage_delete(id)
      }
      | BoardMsg::CancelDelete => {
        next.board.cancel_delete();
        Ok(())
      }
      | BoardMsg::DeleteSent => {
        next.board.confirm_delete();
        Ok(())
      }
    };

    if let Err(err) = outcome {
      tracing::warn!(view = %view, error = %err, "board action ignored");
      return self;
    }
    Rc::new(next)
  }
}

#[cfg(test)]
mod tests {
  use taskdesk_shared::TaskPriority;

  use super::*;

  fn task(
    id: u64,
    status: TaskStatus
  ) -> Task {
    Task {
      id,
      title: format!("task {id}"),
      description: "body".to_string(),
      priority: TaskPriority::Medium,
      status
    }
  }

  fn fetched(
    view: TaskView,
    tasks: Vec<Task>
  ) -> Rc<BoardState> {
    Rc::new(BoardState::new(view))
      .reduce(BoardMsg::Fetched(tasks))
  }

  #[test]
  fn cancelled_completion_bumps_revision()
  {
    let state = fetched(
      TaskView::Active,
      vec![task(1, TaskStatus::Pending)]
    );
    let staged = state
      .reduce(BoardMsg::StageCompletion(1));
    assert_eq!(
      staged
        .board
        .pending_completion()
        .map(|t| t.id),
      Some(1)
    );

    let cancelled = staged
      .reduce(BoardMsg::CancelCompletion);
    assert!(
      cancelled
        .board
        .pending_completion()
        .is_none()
    );
    assert_eq!(cancelled.revision, 1);
  }

  #[test]
  fn overlapping_successes_each_refetch()
  {
    let state = fetched(
      TaskView::Active,
      vec![task(1, TaskStatus::Pending)]
    );
    let start = state.tick;
    let after = state
      .reduce(BoardMsg::Refresh)
      .reduce(BoardMsg::Refresh);
    assert_eq!(after.tick, start + 2);
  }

  #[test]
  fn failed_request_remounts_rows() {
    let state = fetched(
      TaskView::Active,
      vec![task(1, TaskStatus::Pending)]
    );
    let before = state.board.clone();
    let after = state
      .reduce(BoardMsg::RequestFailed);
    assert_eq!(after.revision, 1);
    assert_eq!(after.board, before);
    assert_eq!(after.tick, 0);
  }

  #[test]
  fn completed_page_never_opens_create()
  {
    let state =
      fetched(TaskView::Completed, vec![])
        .reduce(BoardMsg::OpenCreate);
    assert!(!state.creating);
  }

  #[test]
  fn rejected_action_keeps_state() {
    let state = fetched(
      TaskView::Completed,
      vec![task(
        4,
        TaskStatus::Completed
      )]
    );
    let after = Rc::clone(&state)
      .reduce(BoardMsg::BeginEdit(4));
    assert!(Rc::ptr_eq(&state, &after));
  }
}
