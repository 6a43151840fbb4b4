use anyhow::Context;
use live_search::config::Config;
use live_search::fetcher::http::HttpProductFetcher;
use live_search::fetcher::types::DataFetcher;
use live_search::search::coordinator::SearchCoordinator;
use live_search::search::handlers::router;
use live_search::search::sessions::SessionRegistry;
use live_search::view::terminal::TerminalView;
use live_search::view::widget::LiveSearchWidget;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::from_env()?;

    let mut i = 1;
    while i < args.len() {
        let value = || {
            args.get(i + 1)
                .with_context(|| format!("{} requires a value", args[i]))
        };
        match args[i].as_str() {
            "--endpoint" => {
                config.set_endpoint(value()?)?;
                i += 2;
            }
            "--debounce-ms" => {
                config.set_debounce_ms(value()?)?;
                i += 2;
            }
            "--serve" => {
                config.set_bind(value()?)?;
                i += 2;
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            other => {
                tracing::warn!("Ignoring unknown argument '{}'", other);
                i += 1;
            }
        }
    }

    tracing::info!("Product source: {}", config.endpoint);

    let fetcher: Arc<dyn DataFetcher> = Arc::new(HttpProductFetcher::new(
        &config.endpoint,
        config.request_timeout,
    ));

    match config.bind {
        Some(addr) => serve(addr, fetcher).await,
        None => run_terminal(&config, fetcher).await,
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [--endpoint <url>] [--debounce-ms <ms>] [--serve <addr:port>]",
        program
    );
    eprintln!("Without --serve, every line typed on stdin is a search input.");
    eprintln!("Example: {} --debounce-ms 300", program);
    eprintln!("Example: {} --serve 127.0.0.1:8080", program);
}

async fn serve(addr: SocketAddr, fetcher: Arc<dyn DataFetcher>) -> anyhow::Result<()> {
    let registry = SessionRegistry::new(fetcher);
    let app = router(registry);

    tracing::info!("HTTP API listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

async fn run_terminal(config: &Config, fetcher: Arc<dyn DataFetcher>) -> anyhow::Result<()> {
    let coordinator = SearchCoordinator::new(fetcher);
    let view = Arc::new(TerminalView::new(std::io::stdout()));
    let widget = LiveSearchWidget::new(coordinator, view, config.debounce);

    tracing::info!(
        "Type to search (debounce {} ms); Ctrl+D to finish",
        config.debounce.as_millis()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_input: Option<String> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    widget.on_input(line.clone());
                    last_input = Some(line);
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                widget.close();
                return Ok(());
            }
        }
    }

    // End of input: settle the last value instead of waiting out the debounce.
    if let Some(value) = last_input {
        widget.submit(&value).await;
    }

    Ok(())
}
