use taskdesk_shared::{
  CreateTaskDraft,
  TaskCreate,
  TaskPriority,
  TaskStatus
};
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  InputEvent,
  MouseEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::app::ui_debug;

#[derive(Properties, PartialEq)]
pub struct AddTaskModalProps {
  pub open:      bool,
  pub on_submit: Callback<TaskCreate>,
  pub on_close:  Callback<()>
}

/// Create dialog. Inputs live in a
/// `CreateTaskDraft`; an invalid draft
/// shows its error and sends nothing.
#[function_component(AddTaskModal)]
pub fn add_task_modal(
  props: &AddTaskModalProps
) -> Html {
  let draft =
    use_state(CreateTaskDraft::new);
  let error = use_state(|| None::<String>);

  if !props.open {
    return html! {};
  }

  let close = {
    let draft = draft.clone();
    let error = error.clone();
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      draft.set(CreateTaskDraft::new());
      error.set(None);
      on_close.emit(());
    })
  };

  let on_title = {
    let draft = draft.clone();
    let error = error.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.title = input.value();
      draft.set(next);
      error.set(None);
    })
  };
  let on_description = {
    let draft = draft.clone();
    let error = error.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlTextAreaElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.description = input.value();
      draft.set(next);
      error.set(None);
    })
  };
  let on_priority = {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Ok(priority) = select
        .value()
        .parse::<TaskPriority>()
      {
        let mut next = (*draft).clone();
        next.priority = priority;
        draft.set(next);
      }
    })
  };
  let on_status = {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Ok(status) =
        select.value().parse::<TaskStatus>()
      {
        let mut next = (*draft).clone();
        next.status = status;
        draft.set(next);
      }
    })
  };

  let on_submit = {
    let draft = draft.clone();
    let error = error.clone();
    let on_submit = props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      let mut next = (*draft).clone();
      match next.submit() {
        | Ok(create) => {
          ui_debug(
            "create-submit",
            &create.title
          );
          draft.set(next);
          error.set(None);
          on_submit.emit(create);
        }
        | Err(err) => {
          error.set(Some(err.to_string()));
        }
      }
    })
  };

  let current = (*draft).clone();

  html! {
      <div class="modal-backdrop" onclick={close.clone()}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ "Create Task" }</div>
              <form class="content" onsubmit={on_submit}>
                  {
                      if let Some(err) = (*error).clone() {
                          html! { <div class="form-error">{ err }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <div class="field">
                      <label>{ "Title" }</label>
                      <input value={current.title.clone()} placeholder="Task title" oninput={on_title} />
                  </div>
                  <div class="field">
                      <label>{ "Description" }</label>
                      <textarea value={current.description.clone()} placeholder="What needs doing" oninput={on_description} />
                  </div>
                  <div class="field">
                      <label>{ "Priority" }</label>
                      <select onchange={on_priority}>
                          {
                              for TaskPriority::ALL.iter().map(|priority| html! {
                                  <option value={priority.as_key()} selected={*priority == current.priority}>
                                      { priority.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>
                  <div class="field">
                      <label>{ "Status" }</label>
                      <select onchange={on_status}>
                          {
                              for CreateTaskDraft::status_options().iter().map(|status| html! {
                                  <option value={status.as_key()} selected={*status == current.status}>
                                      { status.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>
                  <div class="footer">
                      <button type="button" class="btn" onclick={close}>{ "Cancel" }</button>
                      <button type="submit" class="btn primary">{ "Create" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
