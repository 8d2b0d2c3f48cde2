//! protocols

use super::Context;
use crate::client::RequestClient;
use crate::error::Result;

pub async fn run(ctx: &Context) -> Result<()> {
    let client = RequestClient::public(&ctx.store)?;
    let response = client.get("/v1/protocols", None).await?;
    ctx.printer.print_response(&response);
    Ok(())
}
