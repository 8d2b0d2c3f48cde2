//! login / logout

use super::Context;
use crate::error::Result;
use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    /// Your Krystal Cloud API key
    pub api_key: String,
}

pub fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    ctx.store.set_api_key(&args.api_key)?;
    ctx.printer.print_success("API key saved successfully!");
    ctx.printer.print_info(&format!(
        "Configuration stored at: {}",
        ctx.store.config_path().display()
    ));
    ctx.printer
        .print_info("\nYou can now use krystal to access the API.");
    ctx.printer.print_info("Try: krystal chains list");
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    // An empty key means "unset"; the rest of the config survives.
    ctx.store.set_api_key("")?;
    ctx.printer.print_success("API key removed");
    Ok(())
}
