//! chains list / get

use super::Context;
use crate::client::RequestClient;
use crate::error::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ChainsCommands {
    /// List all supported chains
    List,

    /// Get statistics for a specific chain
    Get {
        /// Chain ID (e.g., 1, 8453, 56)
        chain_id: String,
    },
}

pub async fn run(ctx: &Context, cmd: ChainsCommands) -> Result<()> {
    let client = RequestClient::public(&ctx.store)?;
    let response = match cmd {
        ChainsCommands::List => client.get("/v1/chains", None).await?,
        ChainsCommands::Get { chain_id } => {
            client.get(&format!("/v1/chains/{}", chain_id), None).await?
        }
    };
    ctx.printer.print_response(&response);
    Ok(())
}
