mod add_task_modal;
mod confirm_modal;
mod edit_task_modal;
mod layout;
mod task_row;
mod task_table;

pub use add_task_modal::AddTaskModal;
pub use confirm_modal::ConfirmModal;
pub use edit_task_modal::EditTaskModal;
pub use layout::Layout;
pub use task_row::TaskRow;
pub use task_table::TaskTable;

use taskdesk_shared::{
  TaskPriority,
  TaskStatus
};

/// Badge class for a priority: high
/// red, medium yellow, low green.
pub fn priority_class(
  priority: TaskPriority
) -> &'static str {
  match priority {
    | TaskPriority::High => {
      "badge priority-high"
    }
    | TaskPriority::Medium => {
      "badge priority-medium"
    }
    | TaskPriority::Low => {
      "badge priority-low"
    }
  }
}

pub fn status_dot_class(
  status: TaskStatus
) -> &'static str {
  match status {
    | TaskStatus::Pending => {
      "dot pending"
    }
    | TaskStatus::InProgress => {
      "dot in-progress"
    }
    | TaskStatus::Completed => {
      "dot done"
    }
  }
}
