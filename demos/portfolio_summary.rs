use dotenv::dotenv;
use registry_ledger::llm::{GeminiClient, RegistryAssistant};
use registry_ledger::*;
use std::error::Error;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/registry.json"));
    let files = load_portfolio_from_path(&path)?;

    let client = GeminiClient::from_env()?;
    let assistant = RegistryAssistant::new(client);

    let admin = User {
        id: "admin".to_string(),
        cnic: String::new(),
        name: "Registry Supervisor".to_string(),
        role: UserRole::Admin,
    };
    let visible: Vec<PropertyFile> = visible_files(&files, &admin).into_iter().cloned().collect();

    let dashboard = RenderPass::starting_now().dashboard(&visible);
    println!(
        "Files: {}  Active: {}  Overdue alerts: {}\n",
        dashboard.stats.verified_assets, dashboard.stats.active_records, dashboard.stats.overdue_alerts
    );

    println!("{}\n", assistant.summarize(&admin, &visible).await);

    let reply = assistant
        .chat_or_fallback("Which files have overdue installments?", admin.role, &visible)
        .await;
    println!("{}", reply);

    Ok(())
}
