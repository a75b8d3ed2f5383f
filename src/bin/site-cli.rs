use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Management CLI for the Uno Digit site server", long_about = None)]
struct Cli {
    /// Base URL of the admin API
    #[arg(short, long, default_value = "http://127.0.0.1:8081")]
    url: String,

    /// Admin API key
    #[arg(short, long, env = "UNO_SITE_ADMIN_KEY")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server status and uptime
    Status,
    /// List featured case, project and article slugs
    Content,
    /// List every routable path
    Routes,
    /// Show form submission counters
    Forms,
}

impl Commands {
    fn endpoint(&self) -> &'static str {
        match self {
            Commands::Status => "/admin/status",
            Commands::Content => "/admin/content",
            Commands::Routes => "/admin/routes",
            Commands::Forms => "/admin/forms",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", cli.key))?,
    );

    let url = format!("{}{}", cli.url.trim_end_matches('/'), cli.command.endpoint());
    let res = client.get(url).headers(headers).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: Admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
