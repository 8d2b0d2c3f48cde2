//! config show / set-url / clear

use super::Context;
use crate::error::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a custom API base URL
    SetUrl {
        /// Base URL, e.g. http://localhost:8080
        url: String,
    },

    /// Clear all configuration
    Clear,
}

pub fn run(ctx: &Context, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            ctx.printer.print_info("Configuration:");
            ctx.printer.print_info(&format!(
                "  Config path: {}",
                ctx.store.config_path().display()
            ));
            ctx.printer
                .print_info(&format!("  API key:     {}", ctx.store.masked_api_key()?));
            ctx.printer
                .print_info(&format!("  Base URL:    {}", ctx.store.base_url()?));
        }
        ConfigCommands::SetUrl { url } => {
            ctx.store.set_base_url(&url)?;
            ctx.printer.print_success(&format!("Base URL set to: {}", url));
        }
        ConfigCommands::Clear => {
            ctx.store.clear()?;
            ctx.printer.print_success("Configuration cleared");
        }
    }
    Ok(())
}
