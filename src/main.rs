//! docdeck - terminal client for a document workspace service
//!
//! This is the binary entry point. All logic lives in the member crates.

use clap::Parser;
use url::Url;

use docdeck_client::ServiceClient;
use docdeck_core::prelude::*;

/// Terminal client for browsing, uploading, and searching documents
#[derive(Parser, Debug)]
#[command(name = "docdeck")]
#[command(about = "Terminal client for a document workspace service", long_about = None)]
struct Args {
    /// Base URL of the document service
    #[arg(long, value_name = "URL", default_value = "http://localhost:5000")]
    server: Url,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    docdeck_core::logging::init()?;

    info!("docdeck starting, service at {}", args.server);

    let client = ServiceClient::new(args.server)?;
    let result = docdeck_tui::run(client).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("docdeck exiting");
    result
}
