mod render;
mod session;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cutcart_gateway::SearchClient;

use crate::session::SearchSession;

#[derive(Debug, Parser)]
#[command(name = "cutcart")]
#[command(about = "Cut the Cart: search grocery products for cheaper prices")]
struct Cli {
    /// Product search query. Starts an interactive prompt when omitted.
    query: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = cutcart_core::load_app_config()?;
    let client = SearchClient::with_endpoint(&config.user_agent, &config.endpoint)?;
    let mut session = SearchSession::new(client);

    match cli.query {
        Some(query) => run_once(&mut session, &query).await,
        None => run_interactive(&mut session).await,
    }
}

/// Single submission, then exit; non-zero status when the search failed.
async fn run_once(session: &mut SearchSession, query: &str) -> anyhow::Result<()> {
    session.submit(query).await;
    render::render(session.state());
    if session.state().error.is_some() {
        std::process::exit(1);
    }
    Ok(())
}

/// Prompt loop; an empty line is the usual empty-query no-op, EOF exits.
async fn run_interactive(session: &mut SearchSession) -> anyhow::Result<()> {
    use tokio::io::AsyncBufReadExt;

    println!("Cut the Cart");
    println!("Find cheaper prices!");
    println!();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        session.submit(&line).await;
        render::render(session.state());
        prompt()?;
    }
    println!();
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout();
    write!(stdout, "search> ")?;
    stdout.flush()
}
