//! `mxapi -c <command>` - run one lookup and print it.

use mxtoolbox::{Command, QueryRequest, Result};
use tracing::{debug, warn};

use super::Context;
use crate::output;

pub async fn execute(
    ctx: &Context,
    command: Command,
    argument: String,
    modifier: Option<String>,
) -> Result<()> {
    debug!(%command, "Running lookup");

    let client = ctx.client()?;

    if modifier.is_some() && !command.accepts_port() {
        warn!(%command, "The option is only used by the tcp command, ignoring it");
    }

    let request = QueryRequest::new(command, argument, modifier);
    debug!(argument = request.argument(), port = ?request.port(), "Request built");

    let response = client.execute(&request).await?;
    debug!("Finished making API request");

    let report = response.report()?;
    debug!(command = %response.command(), "Parsed response");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::render(response.command(), &report, ctx.output_format, &mut out)
}
