use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = statefin_server::Args::parse();
    statefin_server::run(args).await
}
