use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, anyhow};
use taskdesk_shared::{CreateTaskDraft, EditTaskDraft, Task, TaskPriority, TaskStatus, TaskView};
use tracing::{debug, info, instrument, warn};

use crate::api::TaskApi;
use crate::cli::Command;
use crate::config::Config;
use crate::render::Renderer;
use crate::session::BoardSession;

/// Stands in for the confirmation dialogs of the web UI.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool>;
}

/// Asks on stderr and reads a y/N answer from stdin. Declines when stdin is
/// not a terminal.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            warn!("stdin is not interactive; declining confirmation (use --yes)");
            return Ok(false);
        }

        let mut err = io::stderr().lock();
        write!(err, "{question} [y/N] ")?;
        err.flush()?;

        let mut answer = String::new();
        stdin
            .lock()
            .read_line(&mut answer)
            .context("failed to read confirmation answer")?;
        Ok(is_yes(&answer))
    }
}

/// Answers every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        debug!(question, answer = self.0, "confirmation answered without prompting");
        Ok(self.0)
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[instrument(skip_all, fields(command = ?command))]
pub fn dispatch<A, W>(
    api: A,
    cfg: &Config,
    renderer: &Renderer,
    command: Command,
    confirm: &mut dyn Confirm,
    out: &mut W,
) -> anyhow::Result<()>
where
    A: TaskApi + Clone,
    W: Write,
{
    let skip_prompts = !cfg.get_bool("confirm").unwrap_or(true);

    match command {
        Command::List => cmd_view(api, renderer, TaskView::Active, out),
        Command::Completed => cmd_view(api, renderer, TaskView::Completed, out),
        Command::Add {
            title,
            description,
            priority,
            status,
        } => {
            let mut draft = CreateTaskDraft {
                title,
                description,
                priority,
                status,
            };
            cmd_add(api, renderer, &mut draft, out)
        }
        Command::Edit {
            id,
            title,
            description,
            priority,
        } => cmd_edit(api, renderer, id, title, description, priority, out),
        Command::Status { id, status, yes } => {
            if yes || skip_prompts {
                cmd_status(api, renderer, id, status, &mut FixedConfirm(true), out)
            } else {
                cmd_status(api, renderer, id, status, confirm, out)
            }
        }
        Command::Delete { id, yes } => {
            if yes || skip_prompts {
                cmd_delete(api, renderer, id, &mut FixedConfirm(true), out)
            } else {
                cmd_delete(api, renderer, id, confirm, out)
            }
        }
        Command::Show { id } => cmd_show(api, renderer, id, out),
    }
}

fn open<A: TaskApi>(api: A, view: TaskView) -> anyhow::Result<BoardSession<A>> {
    BoardSession::open(api, view).with_context(|| format!("failed to fetch {view} tasks"))
}

fn cmd_view<A: TaskApi, W: Write>(
    api: A,
    renderer: &Renderer,
    view: TaskView,
    out: &mut W,
) -> anyhow::Result<()> {
    let session = open(api, view)?;
    renderer.write_board(out, session.board())
}

fn cmd_add<A: TaskApi, W: Write>(
    api: A,
    renderer: &Renderer,
    draft: &mut CreateTaskDraft,
    out: &mut W,
) -> anyhow::Result<()> {
    // Rejected drafts never reach the network.
    let create = draft.submit().context("task not created")?;
    let mut session = open(api, TaskView::Active)?;
    let request = session.board().create(create)?;
    session.submit(request).context("failed to create task")?;
    info!("task created");
    renderer.write_board(out, session.board())
}

fn cmd_edit<A: TaskApi, W: Write>(
    api: A,
    renderer: &Renderer,
    id: u64,
    title: Option<String>,
    description: Option<String>,
    priority: Option<TaskPriority>,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut session = open(api, TaskView::Active)?;
    let target = session.board_mut().begin_edit(id)?;

    let mut draft = EditTaskDraft::for_task(target);
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(priority) = priority {
        draft.priority = priority;
    }

    let validated = draft.submit();
    let edit = match validated {
        Ok(Some(edit)) => edit,
        Ok(None) => return Err(anyhow!("no task selected for editing")),
        Err(err) => {
            session.board_mut().end_edit();
            return Err(err).context("task not updated");
        }
    };
    let request = session.board_mut().edit(edit)?;
    session.submit(request).with_context(|| format!("failed to update task {id}"))?;
    info!(id, "task updated");
    renderer.write_board(out, session.board())
}

fn cmd_status<A: TaskApi, W: Write>(
    api: A,
    renderer: &Renderer,
    id: u64,
    status: TaskStatus,
    confirm: &mut dyn Confirm,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut session = open(api, TaskView::Active)?;
    let immediate = session.board_mut().change_status(id, status)?;

    let sent = match immediate {
        Some(request) => session.submit_opt(Some(request))?,
        None => {
            let title = session
                .board()
                .pending_completion()
                .map(|task| task.title.clone())
                .unwrap_or_default();
            let question = format!(
                "Mark task {id} \"{title}\" as completed? This action cannot be undone once confirmed."
            );
            if confirm.confirm(&question)? {
                let request = session.board_mut().confirm_completion();
                session
                    .submit_opt(request)
                    .with_context(|| format!("failed to complete task {id}"))?
            } else {
                session.board_mut().cancel_completion();
                writeln!(out, "Completion cancelled; task {id} unchanged.")?;
                false
            }
        }
    };

    if sent {
        info!(id, status = %status, "task status changed");
    }
    renderer.write_board(out, session.board())
}

fn cmd_delete<A: TaskApi + Clone, W: Write>(
    api: A,
    renderer: &Renderer,
    id: u64,
    confirm: &mut dyn Confirm,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut session = open(api.clone(), TaskView::Active)?;
    if session.board().find(id).is_none() {
        debug!(id, "task not active; looking in completed view");
        session = open(api, TaskView::Completed)?;
    }
    if session.board().find(id).is_none() {
        return Err(anyhow!("no task with id {id}"));
    }
    session.board_mut().stage_delete(id)?;

    let title = session
        .board()
        .find(id)
        .map(|task| task.title.clone())
        .unwrap_or_default();
    let question = format!("Delete task {id} \"{title}\"?");
    if confirm.confirm(&question)? {
        let request = session.board_mut().confirm_delete();
        session
            .submit_opt(request)
            .with_context(|| format!("failed to delete task {id}"))?;
        info!(id, "task deleted");
    } else {
        session.board_mut().cancel_delete();
        writeln!(out, "Deletion cancelled; task {id} kept.")?;
    }
    renderer.write_board(out, session.board())
}

fn cmd_show<A: TaskApi, W: Write>(
    api: A,
    renderer: &Renderer,
    id: u64,
    out: &mut W,
) -> anyhow::Result<()> {
    let all = api.list().context("failed to fetch tasks")?;
    let task: Task = all
        .into_iter()
        .find(|task| task.id == id)
        .ok_or_else(|| anyhow!("no task with id {id}"))?;
    renderer.write_task_info(out, &task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
