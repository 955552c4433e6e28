//! CLI command implementations.

use std::net::SocketAddr;

use color_eyre::eyre::Result;

use batchsort_server::{Server, ServerConfig};

/// Start the sorting server.
pub async fn serve(host: String, port: u16, cors: bool) -> Result<()> {
    tracing::info!("Starting batchsort server...");

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let config = ServerConfig::builder().addr(addr).cors(cors).build();

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Print version information.
pub fn version() {
    println!("batchsort {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Components:");
    println!("  batchsort-core      - Batch sorter");
    println!("  batchsort-server    - HTTP API");
    println!("  batchsort-telemetry - Logging");
}
