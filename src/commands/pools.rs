//! pools list / get / historical / ticks / transactions

use super::Context;
use crate::client::{Params, RequestClient};
use crate::error::Result;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum PoolsCommands {
    /// List pools with filtering and pagination
    List(ListArgs),

    /// Get detailed pool information
    Get(GetArgs),

    /// Get historical price, volume, and fee data
    Historical(HistoricalArgs),

    /// Get tick data (liquidity distribution)
    Ticks(TicksArgs),

    /// Get transaction history for a pool
    Transactions(TransactionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Chain ID (e.g., 1, 8453, 56)
    #[arg(long)]
    pub chain_id: Option<String>,

    /// Factory address
    #[arg(long)]
    pub factory: Option<String>,

    /// Protocol name
    #[arg(long)]
    pub protocol: Option<String>,

    /// Token address
    #[arg(long)]
    pub token: Option<String>,

    /// Sort field
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Minimum TVL
    #[arg(long)]
    pub min_tvl: Option<String>,

    /// Minimum 24h volume
    #[arg(long)]
    pub min_volume: Option<String>,

    /// Results limit
    #[arg(long)]
    pub limit: Option<String>,

    /// Results offset
    #[arg(long)]
    pub offset: Option<String>,

    /// Include incentives data
    #[arg(long)]
    pub with_incentives: bool,

    /// Include token prices
    #[arg(long)]
    pub include_price: bool,
}

#[derive(Args)]
pub struct GetArgs {
    /// Chain ID
    pub chain_id: String,

    /// Pool address
    pub pool_address: String,

    /// Factory address
    #[arg(long)]
    pub factory: Option<String>,

    /// Include incentives data
    #[arg(long)]
    pub with_incentives: bool,
}

#[derive(Args)]
pub struct HistoricalArgs {
    /// Chain ID
    pub chain_id: String,

    /// Pool address
    pub pool_address: String,

    /// Start timestamp
    #[arg(long)]
    pub start: Option<String>,

    /// End timestamp
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Args)]
pub struct TicksArgs {
    /// Chain ID
    pub chain_id: String,

    /// Pool address
    pub pool_address: String,

    /// Factory address
    #[arg(long)]
    pub factory: Option<String>,
}

#[derive(Args)]
pub struct TransactionsArgs {
    /// Chain ID
    pub chain_id: String,

    /// Pool address
    pub pool_address: String,

    /// Factory address
    #[arg(long)]
    pub factory: Option<String>,

    /// Start timestamp
    #[arg(long)]
    pub start: Option<String>,

    /// End timestamp
    #[arg(long)]
    pub end: Option<String>,

    /// Results limit
    #[arg(long)]
    pub limit: Option<String>,

    /// Results offset
    #[arg(long)]
    pub offset: Option<String>,
}

pub async fn run(ctx: &Context, cmd: PoolsCommands) -> Result<()> {
    let client = RequestClient::authenticated(&ctx.store)?;
    let response = match cmd {
        PoolsCommands::List(args) => {
            let params = Params::new()
                .opt("chainId", args.chain_id)
                .opt("factoryAddress", args.factory)
                .opt("protocol", args.protocol)
                .opt("token", args.token)
                .opt("sortBy", args.sort_by)
                .opt("minTvl", args.min_tvl)
                .opt("minVolume24h", args.min_volume)
                .opt("limit", args.limit)
                .opt("offset", args.offset)
                .flag("withIncentives", args.with_incentives)
                .flag("includeTokenPrice", args.include_price);
            client.get("/v1/pools", Some(&params)).await?
        }
        PoolsCommands::Get(args) => {
            let params = Params::new()
                .opt("factoryAddress", args.factory)
                .flag("withIncentives", args.with_incentives);
            client
                .get(
                    &format!("/v1/pools/{}/{}", args.chain_id, args.pool_address),
                    Some(&params),
                )
                .await?
        }
        PoolsCommands::Historical(args) => {
            let params = Params::new()
                .opt("startTime", args.start)
                .opt("endTime", args.end);
            client
                .get(
                    &format!("/v1/pools/{}/{}/historical", args.chain_id, args.pool_address),
                    Some(&params),
                )
                .await?
        }
        PoolsCommands::Ticks(args) => {
            let params = Params::new().opt("factoryAddress", args.factory);
            client
                .get(
                    &format!("/v1/pools/{}/{}/ticks", args.chain_id, args.pool_address),
                    Some(&params),
                )
                .await?
        }
        PoolsCommands::Transactions(args) => {
            let params = Params::new()
                .opt("factoryAddress", args.factory)
                .opt("startTime", args.start)
                .opt("endTime", args.end)
                .opt("limit", args.limit)
                .opt("offset", args.offset);
            client
                .get(
                    &format!(
                        "/v1/pools/{}/{}/transactions",
                        args.chain_id, args.pool_address
                    ),
                    Some(&params),
                )
                .await?
        }
    };
    ctx.printer.print_response(&response);
    Ok(())
}
