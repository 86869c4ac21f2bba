use clap::Parser;
use cli::Args;

mod app_context;
mod auth;
mod cli;
mod game;
mod geo;
mod health;
mod http;
mod locations;
mod logging;
mod matches;
mod scores;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();
    auth::init(&args)?;
    let app_context = app_context::init(&args)?;
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router).await?;
    Ok(())
}
