use taskdesk_shared::{
  TaskCreate,
  TaskEdit,
  TaskRequest,
  TaskStatus,
  TaskView
};
use yew::{
  Callback,
  Html,
  Properties,
  UseReducerHandle,
  classes,
  function_component,
  html,
  use_effect_with,
  use_reducer
};
use yew_router::prelude::Link;

use super::board_state::{
  BoardMsg,
  BoardState
};
use super::{
  Route,
  ui_debug
};
use crate::api;
use crate::components::{
  AddTaskModal,
  ConfirmModal,
  EditTaskModal,
  TaskTable
};

#[derive(Properties, PartialEq)]
pub struct TaskPageProps {
  pub view: TaskView
}

/// Sends `request` and bumps the tick
/// so the page refetches. A failure is
/// logged, the list stays as it was and
/// the rows remount to show it.
fn submit(
  request: TaskRequest,
  state: UseReducerHandle<BoardState>
) {
  wasm_bindgen_futures::spawn_local(
    async move {
      let method = request.method();
      let path = request.path();
      match api::execute(&request).await {
        | Ok(()) => {
          ui_debug(
            "request-ok",
            &format!("{method} {path}")
          );
          state.dispatch(BoardMsg::Refresh);
        }
        | Err(err) => {
          tracing::error!(method, path = %path, error = %err, "task request failed");
          state.dispatch(
            BoardMsg::RequestFailed
          );
        }
      }
    }
  );
}

#[function_component(TaskPage)]
pub fn task_page(
  props: &TaskPageProps
) -> Html {
  let view = props.view;
  let caps = view.capabilities();
  let state =
    use_reducer(|| BoardState::new(view));

  {
    let state = state.clone();
    use_effect_with(
      (view, state.tick),
      move |(view, tick)| {
        let view = *view;
        let tick = *tick;
        wasm_bindgen_futures::spawn_local(async move {
            tracing::info!(view = %view, tick, "refreshing task list");
            match api::fetch_tasks().await {
                Ok(list) => state.dispatch(BoardMsg::Fetched(list)),
                Err(err) => tracing::error!(error = %err, "task list fetch failed"),
            }
        });
        || ()
      }
    );
  }

  let on_open_create = {
    let state = state.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        state.dispatch(BoardMsg::OpenCreate)
      }
    )
  };
  let on_close_create = {
    let state = state.clone();
    Callback::from(move |()| {
      state.dispatch(BoardMsg::CloseCreate)
    })
  };
  let on_create = {
    let state = state.clone();
    Callback::from(
      move |create: TaskCreate| {
        match state.board.create(create) {
          | Ok(request) => {
            state.dispatch(
              BoardMsg::CloseCreate
            );
            submit(
              request,
              state.clone()
            );
          }
          | Err(err) => {
            tracing::error!(error = %err, "create rejected");
          }
        }
      }
    )
  };

  let on_begin_edit = {
    let state = state.clone();
    Callback::from(move |id: u64| {
      state.dispatch(BoardMsg::BeginEdit(id))
    })
  };
  let on_close_edit = {
    let state = state.clone();
    Callback::from(move |()| {
      state.dispatch(BoardMsg::EndEdit)
    })
  };
  let on_edit = {
    let state = state.clone();
    Callback::from(move |edit: TaskEdit| {
      let mut board = state.board.clone();
      match board.edit(edit) {
        | Ok(request) => {
          state.dispatch(BoardMsg::EndEdit);
          submit(
            request,
            state.clone()
          );
        }
        | Err(err) => {
          tracing::error!(error = %err, "edit rejected");
        }
      }
    })
  };

  let on_status = {
    let state = state.clone();
    Callback::from(
      move |(id, status): (
        u64,
        TaskStatus
      )| {
        ui_debug(
          "status-select",
          &format!("{id} -> {status}")
        );
        let mut board = state.board.clone();
        match board.change_status(id, status)
        {
          | Ok(Some(request)) => submit(
            request,
            state.clone()
          ),
          | Ok(None) => state.dispatch(
            BoardMsg::StageCompletion(id)
          ),
          | Err(err) => {
            tracing::error!(error = %err, "status change rejected");
          }
        }
      }
    )
  };
  let on_confirm_completion = {
    let state = state.clone();
    Callback::from(move |()| {
      let mut board = state.board.clone();
      if let Some(request) =
        board.confirm_completion()
      {
        state.dispatch(
          BoardMsg::CompletionSent
        );
        submit(
          request,
          state.clone()
        );
      }
    })
  };
  let on_cancel_completion = {
    let state = state.clone();
    Callback::from(move |()| {
      state.dispatch(
        BoardMsg::CancelCompletion
      )
    })
  };

  let on_delete = {
    let state = state.clone();
    Callback::from(move |id: u64| {
      state.dispatch(BoardMsg::StageDelete(id))
    })
  };
  let on_confirm_delete = {
    let state = state.clone();
    Callback::from(move |()| {
      let mut board = state.board.clone();
      if let Some(request) =
        board.confirm_delete()
      {
        state
          .dispatch(BoardMsg::DeleteSent);
        submit(
          request,
          state.clone()
        );
      }
    })
  };
  let on_cancel_delete = {
    let state = state.clone();
    Callback::from(move |()| {
      state.dispatch(BoardMsg::CancelDelete)
    })
  };

  let nav = match view {
    | TaskView::Active => html! {
        <Link<Route> classes={classes!("nav-link")} to={Route::Completed}>
            { "Completed Tasks >" }
        </Link<Route>>
    },
    | TaskView::Completed => html! {
        <Link<Route> classes={classes!("nav-link")} to={Route::Active}>
            { "< Back to Tasks" }
        </Link<Route>>
    }
  };

  let completion_dialog = state
    .board
    .pending_completion()
    .map(|task| {
      html! {
          <ConfirmModal
              title="Confirm Completion"
              message={format!("Mark \"{}\" as completed?", task.title)}
              notice={Some("NOTICE: This action cannot be undone once confirmed.".to_string())}
              confirm_label="Confirm"
              on_confirm={on_confirm_completion.clone()}
              on_cancel={on_cancel_completion.clone()}
          />
      }
    })
    .unwrap_or_default();

  let delete_dialog = state
    .board
    .pending_delete()
    .map(|id| {
      let title = state
        .board
        .find(id)
        .map(|task| task.title.clone())
        .unwrap_or_default();
      html! {
          <ConfirmModal
              title="Confirm Deletion"
              message={format!("Delete \"{title}\"?")}
              notice={None::<String>}
              confirm_label="Delete"
              on_confirm={on_confirm_delete.clone()}
              on_cancel={on_cancel_delete.clone()}
          />
      }
    })
    .unwrap_or_default();

  html! {
      <div class="page">
          <div class="page-header">
              <h2>{ view.title() }</h2>
              <div class="page-actions">
                  { nav }
                  {
                      if caps.create {
                          html! {
                              <button type="button" class="btn primary" onclick={on_open_create}>
                                  { "Create Task" }
                              </button>
                          }
                      } else {
                          html! {}
                      }
                  }
              </div>
          </div>
          {
              if state.board.is_empty() {
                  html! { <div class="empty">{ view.empty_message() }</div> }
              } else {
                  html! {
                      <TaskTable
                          tasks={state.board.tasks().to_vec()}
                          capabilities={caps}
                          revision={state.revision}
                          on_edit={on_begin_edit}
                          on_status={on_status}
                          on_delete={on_delete}
                      />
                  }
              }
          }
          {
              if caps.create {
                  html! {
                      <AddTaskModal
                          open={state.creating}
                          on_submit={on_create}
                          on_close={on_close_create}
                      />
                  }
              } else {
                  html! {}
              }
          }
          {
              if caps.edit {
                  html! {
                      <EditTaskModal
                          target={state.board.editing().cloned()}
                          on_submit={on_edit}
                          on_close={on_close_edit}
                      />
                  }
              } else {
                  html! {}
              }
          }
          { completion_dialog }
          { delete_dialog }
      </div>
  }
}
