use anyhow::Context;
use clap::Parser;
use squadron::config::DEFAULT_ROSTER_URL;

/// Fetches the roster document and pretty-prints it. Handy for inspecting
/// what the assembly run will actually see.
#[derive(Parser)]
#[command(name = "fetch-roster")]
#[command(about = "Fetch the hero roster and pretty-print it")]
struct Args {
    #[arg(long, default_value = DEFAULT_ROSTER_URL)]
    roster_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let response = reqwest::get(&args.roster_url)
        .await
        .with_context(|| format!("request to {} failed", args.roster_url))?
        .error_for_status()
        .context("roster endpoint answered with an error status")?;

    let payload: serde_json::Value = response
        .json()
        .await
        .context("roster body was not valid JSON")?;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
