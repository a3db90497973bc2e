use card_server::{api, init_logger, Config, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let state = ServerState::initialize(&config).await?;

    let app = api::router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("card-server listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
