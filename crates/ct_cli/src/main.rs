use clap::Parser;
use ct_core::config::{
    Settings, DEFAULT_MODEL_BASE_URL, DEFAULT_MODEL_NAME, DEFAULT_NEWS_BASE_URL, DEFAULT_PROVIDER,
    MODEL_API_KEY_VAR, NEWS_API_KEY_VAR,
};
use ct_core::logging::init_logging;
use ct_core::Topic;
use ct_inference::ConflictAgent;
use ct_news::NewsLookup;
use ct_web::AppState;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if !current_number.is_empty() {
                let multiplier = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                let seconds = parse_number(&current_number)?
                    .checked_mul(multiplier)
                    .ok_or_else(|| "Duration too large".to_string())?;
                total_seconds = add_seconds(total_seconds, seconds)?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A bare number means seconds
        if !current_number.is_empty() {
            total_seconds = add_seconds(total_seconds, parse_number(&current_number)?)?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

fn parse_number(digits: &str) -> std::result::Result<u64, String> {
    digits
        .parse::<u64>()
        .map_err(|e| format!("Invalid number in duration '{}': {}", digits, e))
}

fn add_seconds(total: u64, seconds: u64) -> std::result::Result<u64, String> {
    total
        .checked_add(seconds)
        .ok_or_else(|| "Duration too large".to_string())
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Track global conflicts: news digests and AI analysis", long_about = None)]
pub struct Cli {
    #[arg(long, env = NEWS_API_KEY_VAR, hide_env_values = true, global = true)]
    news_api_key: Option<String>,
    #[arg(long, env = MODEL_API_KEY_VAR, hide_env_values = true, global = true)]
    model_api_key: Option<String>,
    #[arg(long, default_value = DEFAULT_PROVIDER, global = true, help = "Model provider. Available providers: openai (default), dummy")]
    provider: String,
    #[arg(long, default_value = DEFAULT_MODEL_NAME, global = true)]
    model: String,
    #[arg(long, default_value = DEFAULT_MODEL_BASE_URL, global = true)]
    model_base_url: String,
    #[arg(long, default_value = DEFAULT_NEWS_BASE_URL, global = true)]
    news_base_url: String,
    /// Upper bound for each external call (e.g. 30s, 2m, 1m30s)
    #[arg(long, default_value = "60s", global = true)]
    timeout: HumanDuration,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the web interface
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
    /// Print the latest news digest for a topic followed by an AI report
    News {
        /// Country, region, or conflict topic (e.g. Iran Israel, Sudan, Kashmir)
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },
    /// Ask the agent a free-form question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

impl Cli {
    fn settings(&self) -> ct_core::Result<Settings> {
        let settings = Settings::new(self.news_api_key.clone(), self.model_api_key.clone())?
            .with_provider(&self.provider)
            .with_model_name(&self.model)
            .with_model_base_url(&self.model_base_url)
            .with_news_base_url(&self.news_base_url)
            .with_request_timeout(self.timeout.0);
        settings.validate()?;
        Ok(settings)
    }
}

async fn run_news(settings: &Settings, topic: &str) -> anyhow::Result<()> {
    let topic = Topic::new(topic)?;
    let lookup = NewsLookup::from_settings(settings)?;
    let agent = ConflictAgent::from_settings(settings)?;
    let mut failed = false;

    info!("📡 Fetching news and generating insights...");
    match lookup.fetch_topic(&topic).await {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("{}", e.user_message());
            failed = true;
        }
    }

    match agent.report(&topic).await {
        Ok(text) => println!("\n{}", text),
        Err(e) => {
            eprintln!("{}", e.user_message());
            failed = true;
        }
    }

    if failed {
        anyhow::bail!("One or more requests for '{}' failed", topic);
    }
    Ok(())
}

async fn run_ask(settings: &Settings, question: &str) -> anyhow::Result<()> {
    let agent = ConflictAgent::from_settings(settings)?;
    info!("🤖 Analyzing with AI...");
    let answer = agent
        .respond(question)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    println!("{}", answer);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before parsing so clap's env fallbacks can see it
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings()?;
    info!("✨ Configuration loaded (model {} via {})", settings.model.model_name, settings.model.provider);

    match cli.command {
        Commands::Serve { addr } => {
            let state = AppState::from_settings(&settings)?;
            ct_web::serve(addr, state).await?;
        }
        Commands::News { topic } => run_news(&settings, &topic.join(" ")).await?,
        Commands::Ask { question } => run_ask(&settings, &question.join(" ")).await?,
    }

    Ok(())
}
