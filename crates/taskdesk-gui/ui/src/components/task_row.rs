use taskdesk_shared::{Task, TaskStatus, ViewCapabilities};
use web_sys::{Event, HtmlSelectElement};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

use super::{priority_class, status_dot_class};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
    pub task: Task,
    pub capabilities: ViewCapabilities,
    pub on_edit: Callback<u64>,
    pub on_status: Callback<(u64, TaskStatus)>,
    pub on_delete: Callback<u64>,
}

#[function_component(TaskRow)]
pub fn task_row(props: &TaskRowProps) -> Html {
    let task = &props.task;
    let id = task.id;
    let caps = props.capabilities;

    let status_cell = if caps.change_status {
        let on_status = props.on_status.clone();
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<TaskStatus>() {
                Ok(status) => on_status.emit((id, status)),
                Err(err) => tracing::warn!(error = %err, "ignored status selection"),
            }
        });
        html! {
            <div class="status-cell">
                <span class={status_dot_class(task.status)}></span>
                <select class="status-select" onchange={onchange}>
                    {
                        for TaskStatus::ALL.iter().map(|status| html! {
                            <option value={status.as_key()} selected={*status == task.status}>
                                { status.label() }
                            </option>
                        })
                    }
                </select>
            </div>
        }
    } else {
        html! {
            <span class="badge status">{ task.status.label() }</span>
        }
    };

    let edit_button = if caps.edit {
        let on_edit = props.on_edit.clone();
        html! {
            <button type="button" class="btn" onclick={move |_| on_edit.emit(id)}>{ "Edit" }</button>
        }
    } else {
        html! {}
    };

    let delete_button = if caps.delete {
        let on_delete = props.on_delete.clone();
        html! {
            <button type="button" class="btn danger" onclick={move |_| on_delete.emit(id)}>{ "Delete" }</button>
        }
    } else {
        html! {}
    };

    html! {
        <tr class="row">
            <td>{ &task.title }</td>
            <td class="task-subtitle">{ &task.description }</td>
            <td><span class={priority_class(task.priority)}>{ task.priority.label() }</span></td>
            <td>{ status_cell }</td>
            <td class="actions">
                { edit_button }
                { delete_button }
            </td>
        </tr>
    }
}
