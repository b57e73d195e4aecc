use std::io::{self, IsTerminal, Write};

use anyhow::anyhow;
use taskdesk_shared::{Task, TaskBoard, TaskPriority, TaskStatus};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let color_cfg = cfg.get("color").unwrap_or_else(|| "on".to_string());
        let color = match color_cfg.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" | "1" => true,
            "off" | "no" | "false" | "0" => false,
            other => return Err(anyhow!("invalid color setting: {other}")),
        };

        Ok(Self {
            color: color && io::stdout().is_terminal(),
        })
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip(self, out, board), fields(view = %board.view(), shown = board.len()))]
    pub fn write_board<W: Write>(&self, out: &mut W, board: &TaskBoard) -> anyhow::Result<()> {
        writeln!(out, "{}", board.view().title())?;
        if board.is_empty() {
            writeln!(out, "{}", board.view().empty_message())?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Title".to_string(),
            "Description".to_string(),
            "Priority".to_string(),
            "Status".to_string(),
        ];

        let rows = board
            .tasks()
            .iter()
            .map(|task| {
                vec![
                    self.paint(&task.id.to_string(), "33"),
                    task.title.clone(),
                    task.description.clone(),
                    self.paint_priority(task.priority),
                    self.paint_status(task.status),
                ]
            })
            .collect();

        write_table(out, headers, rows)
    }

    #[tracing::instrument(skip(self, out, task), fields(id = task.id))]
    pub fn write_task_info<W: Write>(&self, out: &mut W, task: &Task) -> anyhow::Result<()> {
        writeln!(out, "id          {}", task.id)?;
        writeln!(out, "title       {}", task.title)?;
        writeln!(out, "description {}", task.description)?;
        writeln!(out, "priority    {}", self.paint_priority(task.priority))?;
        writeln!(out, "status      {}", self.paint_status(task.status))?;
        Ok(())
    }

    fn paint_priority(&self, priority: TaskPriority) -> String {
        let code = match priority {
            TaskPriority::High => "31",
            TaskPriority::Medium => "33",
            TaskPriority::Low => "32",
        };
        self.paint(&priority.as_key().to_ascii_uppercase(), code)
    }

    fn paint_status(&self, status: TaskStatus) -> String {
        let code = match status {
            TaskStatus::Pending => "34",
            TaskStatus::InProgress => "35",
            TaskStatus::Completed => "32",
        };
        self.paint(&status.as_key().to_ascii_uppercase(), code)
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn write_table<W: Write>(
    writer: &mut W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for (header, &width) in headers.iter().zip(&widths) {
        write!(writer, "{header:width$} ")?;
    }
    writeln!(writer)?;

    for &width in &widths {
        write!(writer, "{:-<width$} ", "")?;
    }
    writeln!(writer)?;

    for row in rows {
        for (cell, &width) in row.iter().zip(&widths) {
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = width.saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
