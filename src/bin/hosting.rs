//! Simulation Server Binary
//!
//! Serves `POST /simulate` over HTTP. Settings come from the environment,
//! see [`pusoy::api::Config`].

use pusoy::api::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pusoy::log();
    pusoy::api::server::run(Config::from_env()).await?;
    Ok(())
}
