mod board_state;
mod task_page;

use gloo::console::log;
use taskdesk_shared::TaskView;
use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::{
  BrowserRouter,
  Redirect,
  Routable,
  Switch
};

use crate::components::Layout;
use task_page::TaskPage;

#[derive(
  Clone, Copy, Debug, PartialEq, Routable,
)]
pub enum Route {
  #[at("/")]
  Active,
  #[at("/completed")]
  Completed,
  #[not_found]
  #[at("/404")]
  NotFound
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <Switch<Route> render={switch} />
      </BrowserRouter>
  }
}

fn switch(route: Route) -> Html {
  ui_debug(
    "route",
    &format!("{route:?}")
  );
  let view = match route {
    | Route::Active => TaskView::Active,
    | Route::Completed => {
      TaskView::Completed
    }
    | Route::NotFound => {
      return html! {
          <Redirect<Route> to={Route::Active} />
      };
    }
  };

  // Keyed so that moving between the
  // pages mounts a fresh board.
  html! {
      <Layout>
          <TaskPage key={view.to_string()} view={view} />
      </Layout>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
