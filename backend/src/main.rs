//! # Registration Endpoint
//!
//! Thin entry point that delegates to lib-web for server setup.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig {
        migrations_path: concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"),
    };

    start_server(config).await
}
