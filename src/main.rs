use anyhow::Result;
use tabmerge::{
    cli::{init_logging, parse_args},
    run_tabmerge,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = parse_args()?;
    init_logging(config.verbosity);
    run_tabmerge(config).await
}
