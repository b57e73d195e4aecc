use taskdesk_shared::{TaskBoard, TaskRequest, TaskView};
use tracing::{debug, error, info, instrument, warn};

use crate::api::{ApiError, TaskApi};

/// One view bound to the task API: fetch, partition, act, refetch.
///
/// The list is only ever replaced by a successful fetch, so a failed call
/// leaves whatever was last shown.
pub struct BoardSession<A> {
    api: A,
    board: TaskBoard,
}

impl<A: TaskApi> BoardSession<A> {
    /// Mounts the view with an initial fetch.
    pub fn open(api: A, view: TaskView) -> Result<Self, ApiError> {
        let mut session = Self {
            api,
            board: TaskBoard::new(view),
        };
        session.refresh()?;
        Ok(session)
    }

    /// Mounts the view even when the initial fetch fails; the board then
    /// starts empty, as the web pages do.
    pub fn open_lenient(api: A, view: TaskView) -> Self {
        let mut session = Self {
            api,
            board: TaskBoard::new(view),
        };
        if let Err(err) = session.refresh() {
            warn!(view = %view, error = %err, "initial task fetch failed; board left empty");
        }
        session
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut TaskBoard {
        &mut self.board
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    #[instrument(skip(self), fields(view = %self.board.view()))]
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        match self.api.list() {
            Ok(all) => {
                let total = all.len();
                self.board.apply_fetch(all);
                debug!(total, shown = self.board.len(), "board refreshed");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to fetch tasks");
                Err(err)
            }
        }
    }

    /// Sends `request` and, when it succeeds, refetches the whole list.
    #[instrument(skip(self, request), fields(view = %self.board.view(), method = request.method(), path = %request.path()))]
    pub fn submit(&mut self, request: TaskRequest) -> Result<(), ApiError> {
        if let Err(err) = self.api.execute(&request) {
            error!(error = %err, "task request failed; list left unchanged");
            return Err(err);
        }
        info!("task request accepted");
        self.refresh()
    }

    /// Convenience for the optional requests a board hands back when a
    /// confirmation resolves or a status change is staged.
    pub fn submit_opt(&mut self, request: Option<TaskRequest>) -> Result<bool, ApiError> {
        match request {
            Some(request) => self.submit(request).map(|()| true),
            None => Ok(false),
        }
    }
}
