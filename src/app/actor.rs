//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Fetch on mount
        let initial = self.state.load_page(0);
        self.send(Some(initial));
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    let follow_up = self.state.handle_response(response);
                    self.send(follow_up);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Paging
            UiEvent::PrevPage => {
                let cmd = self.state.prev_page();
                self.send(cmd);
            }
            UiEvent::NextPage => {
                let cmd = self.state.next_page();
                self.send(cmd);
            }
            UiEvent::Refresh => {
                let cmd = self.state.refresh();
                self.send(Some(cmd));
            }

            // List
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Create
            UiEvent::CreateSample => {
                let cmd = self.state.create_sample();
                self.send(Some(cmd));
            }

            // Filters
            UiEvent::OpenFilterInput => self.state.open_filter_input(),
            UiEvent::FilterChar(c) => self.state.filter_char(c),
            UiEvent::FilterBackspace => self.state.filter_backspace(),
            UiEvent::NextFilterField => self.state.next_filter_field(),
            UiEvent::CancelFilterInput => self.state.cancel_filter_input(),
            UiEvent::ApplyFilters => {
                let cmd = self.state.apply_filters();
                self.send(Some(cmd));
            }
            UiEvent::ClearFilters => {
                let cmd = self.state.clear_filters();
                self.send(cmd);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
