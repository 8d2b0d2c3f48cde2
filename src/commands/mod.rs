//! Command routing
//!
//! Each subcommand is a pure mapping from CLI flags to an API path and a
//! [`Params`](crate::client::Params) table; handlers delegate to
//! [`RequestClient`](crate::client::RequestClient) and render through the
//! shared [`Printer`](crate::output::Printer).

pub mod auth;
pub mod balances;
pub mod chains;
pub mod config;
pub mod pools;
pub mod positions;
pub mod protocols;
pub mod strategies;

use crate::config::ConfigStore;
use crate::error::Result;
use crate::output::Printer;
use clap::Subcommand;

/// Per-invocation context handed to every command handler.
pub struct Context {
    pub store: ConfigStore,
    pub printer: Printer,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set your Krystal API key
    Login(auth::LoginArgs),

    /// Remove your API key
    Logout,

    /// Manage CLI configuration
    #[command(subcommand)]
    Config(config::ConfigCommands),

    /// Query supported blockchain networks
    #[command(subcommand)]
    Chains(chains::ChainsCommands),

    /// List all supported DeFi protocols
    Protocols,

    /// Get wallet token balances across chains
    Balances(balances::BalancesArgs),

    /// Query liquidity pool information
    #[command(subcommand)]
    Pools(pools::PoolsCommands),

    /// Query LP positions
    #[command(subcommand)]
    Positions(positions::PositionsCommands),

    /// Query automated strategies
    #[command(subcommand)]
    Strategies(strategies::StrategiesCommands),
}

impl Commands {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Commands::Login(args) => auth::login(ctx, args),
            Commands::Logout => auth::logout(ctx),
            Commands::Config(cmd) => config::run(ctx, cmd),
            Commands::Chains(cmd) => chains::run(ctx, cmd).await,
            Commands::Protocols => protocols::run(ctx).await,
            Commands::Balances(args) => balances::run(ctx, args).await,
            Commands::Pools(cmd) => pools::run(ctx, cmd).await,
            Commands::Positions(cmd) => positions::run(ctx, cmd).await,
            Commands::Strategies(cmd) => strategies::run(ctx, cmd).await,
        }
    }
}
