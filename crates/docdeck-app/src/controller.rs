//! Workspace controller: owns state and runs the TEA message loop

use std::sync::Arc;

use tokio::sync::mpsc;

use docdeck_client::ServiceClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::WorkspaceState;

/// Capacity of the message channel between spawned tasks and the loop.
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Owns the workspace state and the single message channel every
/// asynchronous resolution flows through.
///
/// All mutation happens inside [`process_message`](Self::process_message),
/// one message at a time, so handlers never observe a half-applied
/// transition. The driving loop (TUI runner) alternates between feeding
/// terminal events in and draining task resolutions out.
pub struct WorkspaceController {
    pub state: WorkspaceState,
    client: Arc<ServiceClient>,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
}

impl WorkspaceController {
    pub fn new(client: ServiceClient) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state: WorkspaceState::new(),
            client: Arc::new(client),
            msg_tx,
            msg_rx,
        }
    }

    /// Sender handle for external producers (terminal event loop).
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Kick off the initial file listing fetch.
    pub fn bootstrap(&mut self) {
        self.process_message(Message::RefreshFiles);
    }

    /// Process one message through the update function, dispatching any
    /// resulting action and chaining follow-up messages to completion.
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                handle_action(action, self.client.clone(), self.msg_tx.clone());
            }
            msg = result.message;
        }
    }

    /// Await the next message from spawned tasks or external producers.
    pub async fn recv(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Drain without blocking; used after a render to batch resolutions.
    pub fn try_recv(&mut self) -> Option<Message> {
        self.msg_rx.try_recv().ok()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
