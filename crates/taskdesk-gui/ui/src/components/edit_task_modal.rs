use taskdesk_shared::{
  EditTaskDraft,
  Task,
  TaskEdit,
  TaskPriority
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
  use_effect_with,
  use_state
};

use crate::app::ui_debug;

#[derive(Properties, PartialEq)]
pub struct EditTaskModalProps {
  pub target:    Option<Task>,
  pub on_submit: Callback<TaskEdit>,
  pub on_close:  Callback<()>
}

/// Edit dialog. Open while `target` is
/// set; the inputs are re-seeded only
/// when the target itself changes.
#[function_component(EditTaskModal)]
pub fn edit_task_modal(
  props: &EditTaskModalProps
) -> Html {
  let draft =
    use_state(EditTaskDraft::default);
  let error = use_state(|| None::<String>);

  {
    let draft = draft.clone();
    let error = error.clone();
    use_effect_with(
      props.target.clone(),
      move |target| {
        let mut next = (*draft).clone();
        next.set_target(target.clone());
        if next != *draft {
          draft.set(next);
          error.set(None);
        }
        || ()
      }
    );
  }

  let Some(target) = draft.target().cloned()
  else {
    return html! {};
  };

  let close = {
    let error = error.clone();
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
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

  let on_submit = {
    let draft = draft.clone();
    let error = error.clone();
    let on_submit = props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      match draft.submit() {
        | Ok(Some(edit)) => {
          ui_debug(
            "edit-submit",
            &edit.id.to_string()
          );
          error.set(None);
          on_submit.emit(edit);
        }
        | Ok(None) => {}
        | Err(err) => {
          error.set(Some(err.to_string()));
        }
      }
    })
  };

  html! {
      <div class="modal-backdrop" onclick={close.clone()}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ format!("Edit Task #{}", target.id) }</div>
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
                      <input value={draft.title.clone()} oninput={on_title} />
                  </div>
                  <div class="field">
                      <label>{ "Description" }</label>
                      <textarea value={draft.description.clone()} oninput={on_description} />
                  </div>
                  <div class="field">
                      <label>{ "Priority" }</label>
                      <select onchange={on_priority}>
                          {
                              for TaskPriority::ALL.iter().map(|priority| html! {
                                  <option value={priority.as_key()} selected={*priority == draft.priority}>
                                      { priority.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>
                  <div class="footer">
                      <button type="button" class="btn" onclick={close}>{ "Cancel" }</button>
                      <button type="submit" class="btn primary">{ "Save" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
