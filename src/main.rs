//! Question Service Entry Point
//!
//! Initializes configuration, storage, the notifier, and starts the HTTP server.

use question_service::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
