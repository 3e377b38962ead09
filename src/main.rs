use clap::Parser;
use subtally::cli::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    subtally::cli::run(config).await
}
