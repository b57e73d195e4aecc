use taskdesk_shared::{
  Task,
  TaskStatus,
  ViewCapabilities
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  pub tasks:        Vec<Task>,
  pub capabilities: ViewCapabilities,
  pub revision:     u64,
  pub on_edit:      Callback<u64>,
  pub on_status:
    Callback<(u64, TaskStatus)>,
  pub on_delete:    Callback<u64>
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  let caps = props.capabilities;
  html! {
      <table class="task-table">
          <thead>
              <tr>
                  <th>{ "Title" }</th>
                  <th>{ "Description" }</th>
                  <th>{ "Priority" }</th>
                  <th>{ "Status" }</th>
                  <th>{ "Actions" }</th>
              </tr>
          </thead>
          <tbody>
              {
                  for props.tasks.iter().cloned().map(|task| html! {
                      <TaskRow
                          key={format!("{}:{}", task.id, props.revision)}
                          task={task.clone()}
                          capabilities={caps}
                          on_edit={props.on_edit.clone()}
                          on_status={props.on_status.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  })
              }
          </tbody>
      </table>
  }
}
