//! positions list / get / historical / transactions

use super::Context;
use crate::client::{Params, RequestClient};
use crate::error::Result;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum PositionsCommands {
    /// List positions for a wallet
    List(ListArgs),

    /// Get detailed position information
    Get(GetArgs),

    /// Get position historical performance
    Historical(HistoricalArgs),

    /// Get position transaction history
    Transactions(TransactionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Wallet address
    #[arg(long)]
    pub wallet: String,

    /// Position status filter
    #[arg(long)]
    pub status: Option<String>,

    /// Comma-separated protocols
    #[arg(long)]
    pub protocols: Option<String>,

    /// Comma-separated chain IDs
    #[arg(long)]
    pub chain_ids: Option<String>,

    /// Include closed positions
    #[arg(long)]
    pub include_closed: bool,

    /// Include spam positions
    #[arg(long)]
    pub include_spam: bool,

    /// Results offset
    #[arg(long)]
    pub offset: Option<String>,

    /// Results limit
    #[arg(long)]
    pub limit: Option<String>,

    /// Order by field
    #[arg(long)]
    pub order_by: Option<String>,

    /// Order descending
    #[arg(long)]
    pub order_desc: bool,
}

#[derive(Args)]
pub struct GetArgs {
    /// Chain ID
    pub chain_id: String,

    /// Position ID
    pub position_id: String,

    /// Wallet address (required for V2 positions)
    #[arg(long)]
    pub wallet: Option<String>,
}

#[derive(Args)]
pub struct HistoricalArgs {
    /// Chain ID
    pub chain_id: String,

    /// Position ID
    pub position_id: String,

    /// Wallet address
    #[arg(long)]
    pub wallet: Option<String>,

    /// Timeframe (1h, 7d, 30d)
    #[arg(long)]
    pub timeframe: Option<String>,
}

#[derive(Args)]
pub struct TransactionsArgs {
    /// Chain ID
    pub chain_id: String,

    /// Position ID
    pub position_id: String,

    /// Wallet address
    #[arg(long)]
    pub wallet: Option<String>,

    /// Start timestamp
    #[arg(long)]
    pub start: Option<String>,

    /// End timestamp
    #[arg(long)]
    pub end: Option<String>,
}

pub async fn run(ctx: &Context, cmd: PositionsCommands) -> Result<()> {
    let client = RequestClient::authenticated(&ctx.store)?;
    let response = match cmd {
        PositionsCommands::List(args) => {
            let params = Params::new()
                .opt("wallet", Some(args.wallet))
                .opt("positionStatus", args.status)
                .opt("protocols", args.protocols)
                .opt("chainIds", args.chain_ids)
                .flag("includeClosedPosition", args.include_closed)
                .flag("includeSpamPosition", args.include_spam)
                .opt("offset", args.offset)
                .opt("limit", args.limit)
                .opt("orderBy", args.order_by)
                .flag("orderDesc", args.order_desc);
            client.get("/v1/positions", Some(&params)).await?
        }
        PositionsCommands::Get(args) => {
            let params = Params::new().opt("wallet", args.wallet);
            client
                .get(
                    &format!("/v1/positions/{}/{}", args.chain_id, args.position_id),
                    Some(&params),
                )
                .await?
        }
        PositionsCommands::Historical(args) => {
            let params = Params::new()
                .opt("wallet", args.wallet)
                .opt("timeframe", args.timeframe);
            client
                .get(
                    &format!(
                        "/v1/positions/{}/{}/historicalPerformance",
                        args.chain_id, args.position_id
                    ),
                    Some(&params),
                )
                .await?
        }
        PositionsCommands::Transactions(args) => {
            let params = Params::new()
                .opt("wallet", args.wallet)
                .opt("startTimestamp", args.start)
                .opt("endTimestamp", args.end);
            client
                .get(
                    &format!(
                        "/v1/positions/{}/{}/transactions",
                        args.chain_id, args.position_id
                    ),
                    Some(&params),
                )
                .await?
        }
    };
    ctx.printer.print_response(&response);
    Ok(())
}
