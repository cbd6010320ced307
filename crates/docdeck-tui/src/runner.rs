//! Main event loop: terminal events in, messages through, frames out

use docdeck_app::WorkspaceController;
use docdeck_client::ServiceClient;
use docdeck_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against a service client until the user quits.
///
/// Terminal state is restored on both clean exit and panic.
pub async fn run(client: ServiceClient) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let server = client.base_url().to_string();
    let mut controller = WorkspaceController::new(client);
    controller.bootstrap();

    let result = run_loop(&mut term, &mut controller, &server).await;
    ratatui::restore();
    result
}

async fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    controller: &mut WorkspaceController,
    server: &str,
) -> Result<()> {
    info!("starting workspace loop against {server}");

    while !controller.should_quit() {
        term.draw(|frame| render::view(frame, &controller.state, server))
            .map_err(|e| Error::terminal(e.to_string()))?;

        // Terminal events: the 50ms poll timeout doubles as the tick.
        if let Some(message) = event::poll()? {
            controller.process_message(message);
        }

        // Resolutions from spawned tasks, batched before the next frame.
        while let Some(message) = controller.try_recv() {
            controller.process_message(message);
        }
    }

    info!("workspace loop stopped");
    Ok(())
}
