use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
  #[prop_or_default]
  pub children: Html
}

#[function_component(Layout)]
pub fn layout(
  props: &LayoutProps
) -> Html {
  html! {
      <div class="app-shell">
          <header class="app-header">
              <h1>{ "Task Manager" }</h1>
          </header>
          <main class="app-main">
              { props.children.clone() }
          </main>
      </div>
  }
}
