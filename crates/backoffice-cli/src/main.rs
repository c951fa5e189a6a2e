use clap::Parser;

use backoffice_cli::{init_tracing, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let output = run(cli).await?;
    print!("{output}");
    Ok(())
}
