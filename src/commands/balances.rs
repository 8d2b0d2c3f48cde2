//! balances

use super::Context;
use crate::client::{Params, RequestClient};
use crate::error::Result;
use clap::Args;

#[derive(Args)]
pub struct BalancesArgs {
    /// Wallet address
    pub wallet: String,

    /// Comma-separated chain IDs to filter
    #[arg(long)]
    pub chain_ids: Option<String>,

    /// Filter by token address
    #[arg(long)]
    pub token: Option<String>,

    /// Include dust tokens
    #[arg(long)]
    pub include_dust: bool,
}

pub async fn run(ctx: &Context, args: BalancesArgs) -> Result<()> {
    let client = RequestClient::authenticated(&ctx.store)?;
    let params = Params::new()
        .opt("chainIds", args.chain_ids)
        .opt("tokenAddress", args.token)
        .flag("includeDustToken", args.include_dust);
    let response = client
        .get(&format!("/v1/balances/{}", args.wallet), Some(&params))
        .await?;
    ctx.printer.print_response(&response);
    Ok(())
}
