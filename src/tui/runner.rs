//! TUI runner - manages the terminal lifecycle and the board event loop
//!
//! Network work runs on spawned tasks against the shared workspace; the loop
//! itself only locks briefly to snapshot state for drawing.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use tracing::{debug, warn};

use crate::drag::{DragCoordinator, DragEvent};
use crate::errors::{BoardError, Result};
use crate::sync::HypothesisApi;
use crate::transition::{
    TransitionController, TransitionDialog, TransitionOrigin, TransitionOutcome, TransitionRequest,
};
use crate::workspace::SharedWorkspace;

use super::events::{translate_key, translate_mouse, BoardAction, PointerAction};
use super::state::{blocked_message, TuiState};
use super::widgets::{render_screen, BoardLayout};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main TUI runner
pub struct TuiRunner<A: HypothesisApi + 'static> {
    workspace: SharedWorkspace,
    controller: TransitionController<A>,
    ui: TuiState,
    drag: DragCoordinator,
    layout: Option<BoardLayout>,
}

impl<A: HypothesisApi + 'static> TuiRunner<A> {
    pub fn new(workspace: SharedWorkspace, controller: TransitionController<A>, drag_threshold: f64) -> Self {
        Self {
            workspace,
            controller,
            ui: TuiState::new(),
            drag: DragCoordinator::new(drag_threshold),
            layout: None,
        }
    }

    /// Run the TUI until the user quits
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let snapshot = {
                let mut state = self.workspace.lock().await;
                state.expire_toasts(Instant::now());
                state.clone()
            };
            if snapshot.busy != self.drag.is_disabled() {
                self.drag.set_disabled(snapshot.busy);
            }

            let ui = &self.ui;
            let overlay = self.drag.overlay();
            let mut drawn = None;
            terminal.draw(|f| {
                drawn = Some(render_screen(f, &snapshot, ui, overlay));
            })?;
            self.layout = drawn;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = translate_key(key, self.ui.dialog_open());
                        self.handle_action(action).await;
                    }
                    Event::Mouse(mouse) => {
                        if let Some(pointer) = translate_mouse(mouse) {
                            self.handle_pointer(pointer);
                        }
                    }
                    // Redrawn on the next pass
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            if self.ui.should_quit {
                return Ok(());
            }
        }
    }

    async fn handle_action(&mut self, action: BoardAction) {
        match action {
            BoardAction::Quit => {
                self.ui = std::mem::take(&mut self.ui).with_quit();
            }
            BoardAction::Refresh => self.spawn_refresh(),
            BoardAction::OpenDialog => {
                let detail = self.workspace.lock().await.active_detail.clone();
                if let Some(detail) = detail {
                    self.ui = std::mem::take(&mut self.ui).with_dialog(Some(TransitionDialog::open(&detail)));
                }
            }
            BoardAction::NextTarget => {
                self.ui = std::mem::take(&mut self.ui).map_dialog(TransitionDialog::select_next_option);
            }
            BoardAction::PreviousTarget => {
                self.ui = std::mem::take(&mut self.ui).map_dialog(TransitionDialog::select_previous_option);
            }
            BoardAction::Submit => {
                let request = self
                    .ui
                    .dialog
                    .as_ref()
                    .filter(|d| d.can_submit(self.controller.is_busy()))
                    .and_then(TransitionDialog::request);
                if let Some(request) = request {
                    self.ui = std::mem::take(&mut self.ui).with_dialog(None);
                    self.spawn_transition(request);
                }
            }
            BoardAction::Back => {
                if self.drag.is_dragging() {
                    self.drag.cancel();
                } else {
                    self.ui = std::mem::take(&mut self.ui).with_dialog(None);
                }
            }
            BoardAction::DismissToast => {
                self.workspace.lock().await.toasts.dismiss_latest();
            }
            BoardAction::None => {}
        }
    }

    fn handle_pointer(&mut self, pointer: PointerAction) {
        let Some(layout) = &self.layout else {
            return;
        };
        match pointer {
            PointerAction::Down(at) => {
                if let Some(card) = layout.card_at(at) {
                    self.drag.pointer_down(card.item_id.clone(), card.stage, at);
                }
            }
            PointerAction::Drag(at) => {
                if let DragEvent::Started(id) = self.drag.pointer_move(at) {
                    debug!(%id, "Drag started");
                }
            }
            PointerAction::Up(at) => match self.drag.pointer_up(at, &layout.drop_zones()) {
                DragEvent::Select(id) => self.spawn_select(id),
                DragEvent::Intent(intent) => {
                    self.spawn_transition(TransitionRequest::new(
                        intent.item_id,
                        intent.from,
                        intent.to,
                        TransitionOrigin::Drag,
                    ));
                }
                DragEvent::Cancelled => debug!("Drag cancelled"),
                DragEvent::Started(_) | DragEvent::None => {}
            },
        }
    }

    fn spawn_transition(&self, request: TransitionRequest) {
        let controller = self.controller.clone();
        let workspace = self.workspace.clone();
        tokio::spawn(async move {
            match controller.submit(&workspace, request).await {
                Ok(TransitionOutcome::Blocked(report)) => {
                    workspace.lock().await.set_error(blocked_message(&report));
                }
                Ok(_) => {}
                Err(BoardError::TransitionInFlight) => {
                    debug!("Ignoring move while another is in flight");
                }
                Err(err) => warn!(error = %err, "Transition task failed"),
            }
        });
    }

    fn spawn_select(&self, id: String) {
        let engine = self.controller.engine().clone();
        let workspace = self.workspace.clone();
        tokio::spawn(async move {
            if let Err(err) = engine.refresh_detail(&workspace, &id).await {
                warn!(%id, error = %err, "Failed to load hypothesis");
                workspace
                    .lock()
                    .await
                    .set_error(format!("Could not load {}: {}", id, err));
            }
        });
    }

    fn spawn_refresh(&self) {
        let engine = self.controller.engine().clone();
        let workspace = self.workspace.clone();
        tokio::spawn(async move {
            if let Err(err) = engine.resync(&workspace).await {
                warn!(error = %err, "Failed to refresh board");
                workspace
                    .lock()
                    .await
                    .set_error(format!("Could not refresh board: {}", err));
            }
        });
    }
}
