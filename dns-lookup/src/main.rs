use domain_name_resolver::{dispatch, Resolver};
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod output;

use cli_args::CliArgs;
use output::LineSink;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 日志写到 stderr，stdout 只输出查询结果
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: CliArgs = argh::from_env();
    let lookup = configuration::get_config(Some(args.config_file()), args.overrides())?;

    println!("DNS Server: {}", lookup.dns.server());

    let domains = lookup.domains();
    if domains.is_empty() {
        println!("Usage: --domains domain1,domain2,...");
        return Ok(());
    }

    let resolver = Resolver::new(lookup.dns.server_address()?).with_timeout(lookup.dns.timeout());

    let mut sink = LineSink::new(std::io::stdout());
    let summary = dispatch(Arc::new(resolver), domains, &mut sink).await;
    tracing::info!(
        "resolved {} domains, {} succeeded, {} failed",
        summary.total(),
        summary.succeeded,
        summary.failed
    );

    Ok(())
}
