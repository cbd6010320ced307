//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use docdeck_client::ServiceClient;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// Each task resolves into exactly one message sent back through `msg_tx`;
/// nothing here touches state. A send failure means the event loop is gone,
/// so it is logged and dropped.
pub fn handle_action(action: UpdateAction, client: Arc<ServiceClient>, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::LoadFiles => {
            tokio::spawn(async move {
                let message = match client.list_files().await {
                    Ok(files) => Message::FilesLoaded { files },
                    Err(e) => Message::FilesLoadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::Upload { path } => {
            tokio::spawn(async move {
                let message = match upload_file(&client, path).await {
                    Ok(record) => Message::UploadCompleted { record },
                    Err(error) => Message::UploadFailed { error },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::RunSearch {
            ticket,
            query,
            scope_file_id,
        } => {
            tokio::spawn(async move {
                debug!("search #{ticket}: {query:?} scope={scope_file_id:?}");
                let message = match client.search(&query, scope_file_id.as_deref()).await {
                    Ok(matches) => Message::SearchCompleted { ticket, matches },
                    Err(e) => Message::SearchFailed {
                        ticket,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::FetchContent { ticket, file_id } => {
            tokio::spawn(async move {
                let message = match client.fetch_content(&file_id).await {
                    Ok(content) => Message::ContentLoaded {
                        ticket,
                        file_id,
                        content,
                    },
                    Err(e) => Message::ContentLoadFailed {
                        ticket,
                        file_id,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::LoadDebugReport => {
            tokio::spawn(async move {
                let message = match client.debug_files().await {
                    Ok(report) => Message::DebugReportLoaded { report },
                    Err(e) => Message::DebugReportFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }
    }
}

/// Read the local file and push it to the service.
async fn upload_file(client: &ServiceClient, path: PathBuf) -> Result<docdeck_core::FileRecord, String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| format!("not a file path: {}", path.display()))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    client
        .upload_file(bytes, &name)
        .await
        .map_err(|e| e.to_string())
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if let Err(e) = msg_tx.send(message).await {
        error!("event loop closed, dropping task result: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use url::Url;

    fn client() -> Arc<ServiceClient> {
        // Routable nowhere: tests only exercise the local half of the path.
        Arc::new(ServiceClient::new(Url::parse("http://localhost:1").unwrap()).unwrap())
    }

    #[tokio::test]
    async fn test_upload_missing_file_reports_read_error() {
        let err = upload_file(&client(), PathBuf::from("/no/such/file.pdf"))
            .await
            .unwrap_err();
        assert!(err.contains("/no/such/file.pdf"));
    }

    #[tokio::test]
    async fn test_upload_directory_path_rejected() {
        let err = upload_file(&client(), PathBuf::from("/")).await.unwrap_err();
        assert!(err.contains("not a file path"));
    }

    #[tokio::test]
    async fn test_upload_unreachable_service_surfaces_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"payload").unwrap();

        let err = upload_file(&client(), tmp.path().to_path_buf())
            .await
            .unwrap_err();
        assert!(!err.is_empty());
    }
}
