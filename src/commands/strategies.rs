//! strategies list / positions

use super::Context;
use crate::client::{Params, RequestClient};
use crate::error::Result;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum StrategiesCommands {
    /// List strategies for a wallet
    List(ListArgs),

    /// Get positions for a strategy
    Positions(PositionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Wallet address
    #[arg(long)]
    pub wallet: String,

    /// Status filter (OPEN/CLOSED)
    #[arg(long)]
    pub status: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<String>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<String>,
}

#[derive(Args)]
pub struct PositionsArgs {
    /// Strategy ID
    pub strategy_id: String,

    /// Page number
    #[arg(long)]
    pub page: Option<String>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<String>,
}

pub async fn run(ctx: &Context, cmd: StrategiesCommands) -> Result<()> {
    let client = RequestClient::authenticated(&ctx.store)?;
    let response = match cmd {
        StrategiesCommands::List(args) => {
            let params = Params::new()
                .opt("wallet", Some(args.wallet))
                .opt("status", args.status)
                .opt("page", args.page)
                .opt("perPage", args.per_page);
            client.get("/v1/strategies", Some(&params)).await?
        }
        StrategiesCommands::Positions(args) => {
            let params = Params::new()
                .opt("page", args.page)
                .opt("perPage", args.per_page);
            client
                .get(
                    &format!("/v1/strategies/{}/positions", args.strategy_id),
                    Some(&params),
                )
                .await?
        }
    };
    ctx.printer.print_response(&response);
    Ok(())
}
