use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
  pub title:         String,
  pub message:       String,
  #[prop_or_default]
  pub notice:        Option<String>,
  pub confirm_label: String,
  pub on_confirm:    Callback<()>,
  pub on_cancel:     Callback<()>
}

/// Yes/no dialog. Clicking the backdrop
/// counts as cancel.
#[function_component(ConfirmModal)]
pub fn confirm_modal(
  props: &ConfirmModalProps
) -> Html {
  let on_backdrop = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(move |_: MouseEvent| {
      on_cancel.emit(())
    })
  };
  let on_cancel = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(move |_: MouseEvent| {
      on_cancel.emit(())
    })
  };
  let on_confirm = {
    let on_confirm =
      props.on_confirm.clone();
    Callback::from(move |_: MouseEvent| {
      on_confirm.emit(())
    })
  };

  html! {
      <div class="modal-backdrop" onclick={on_backdrop}>
          <div class="modal modal-sm" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ &props.title }</div>
              <div class="content">
                  <p>{ &props.message }</p>
                  {
                      if let Some(notice) = props.notice.clone() {
                          html! { <p class="notice">{ notice }</p> }
                      } else {
                          html! {}
                      }
                  }
                  <div class="footer">
                      <button type="button" class="btn" onclick={on_cancel}>{ "Cancel" }</button>
                      <button type="button" class="btn danger" onclick={on_confirm}>
                          { &props.confirm_label }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
