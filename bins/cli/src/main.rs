//! Finpanel terminal dashboard
//!
//! Signs in with credentials from the environment, loads the dashboard
//! snapshot, and prints the aggregates.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finpanel_client::{ApiClient, AssistantClient, AuthClient, DashboardService};
use finpanel_core::domain::Credentials;
use finpanel_core::validation::validate_credentials;
use finpanel_shared::{ClientConfig, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finpanel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ClientConfig::load()?;
    info!(base_url = %config.backend.base_url, "connecting");

    let session = Arc::new(Session::new());
    let api = Arc::new(ApiClient::new(config, Arc::clone(&session))?);

    // Sign in with credentials from the environment
    let credentials = Credentials {
        email: std::env::var("FINPANEL_EMAIL")?,
        password: std::env::var("FINPANEL_PASSWORD")?,
    };
    validate_credentials(&credentials)?;

    let auth = AuthClient::new(Arc::clone(&api));
    let login = auth.login(&credentials).await?;
    info!(user = %login.user.name, "signed in");

    // Load and print the dashboard snapshot
    let dashboard = DashboardService::new(Arc::clone(&api));
    let snapshot = dashboard.load_or_empty().await;

    println!("Saldo total:    {}", snapshot.totals.total_balance);
    println!("Receitas:       {}", snapshot.totals.total_income);
    println!("Despesas:       {}", snapshot.totals.total_expense);
    println!("Metas ativas:   {}", snapshot.active_goals);
    println!("Metas vencidas: {}", snapshot.overdue_goals);

    println!("\nMovimentações recentes:");
    for transaction in &snapshot.recent_transactions {
        println!(
            "  {}  {:<14} {:>12}  {}",
            transaction.occurred_on,
            transaction.kind.label(),
            transaction.amount,
            transaction.description
        );
    }

    if !snapshot.discrepancies.is_empty() {
        warn!(
            mismatches = snapshot.discrepancies.len(),
            "algumas categorias do gráfico diferem dos dados"
        );
    }

    // Probe the assistant so the chat view can badge availability
    let assistant = AssistantClient::new(api);
    let online = assistant.dynamic_status().await;
    info!(assistant_online = online, "assistant status");

    Ok(())
}
