// Main entry point
use clap::Parser;
use code_translator::application::translate::translate;
use code_translator::domain::model::{Language, TranslationRequest};
use code_translator::infrastructure::config::{self, load_config, Config, Logging};
use code_translator::infrastructure::network::client::OllamaGateway;
use code_translator::interfaces::cli::Cli;
use code_translator::interfaces::repl::Repl;
use code_translator::interfaces::web;
use code_translator::presentation::render::format_result;
use code_translator::presentation::theme::Theme;
use code_translator::state::AppState;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // .env is optional
    dotenvy::dotenv().ok();
    let mut config = load_config()?;
    if let Some(model) = &cli.model {
        config.ollama.model = model.clone();
    }

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }
    if cli.status {
        print_status(&config).await;
        return Ok(());
    }

    let theme_name = cli.theme.clone().unwrap_or_else(|| config.theme.clone());
    let theme = Theme::from_name(&theme_name);
    let source: Language = cli
        .from
        .as_deref()
        .unwrap_or(config.defaults.source_language.as_str())
        .parse()?;
    let target: Language = cli
        .to
        .as_deref()
        .unwrap_or(config.defaults.target_language.as_str())
        .parse()?;

    let state = AppState::new(config)?;

    if cli.serve {
        web::serve(state).await?;
        return Ok(());
    }
    if cli.repl {
        let stdin = std::io::stdin();
        let mut repl = Repl::new(
            &state,
            &theme,
            stdin.lock(),
            std::io::stdout(),
            source,
            target,
        );
        repl.run().await?;
        return Ok(());
    }

    // One-shot translation
    let code = match read_source(&cli)? {
        Some(code) => code,
        None => {
            eprintln!("{}", "Please provide source code or --input <FILE>".red());
            std::process::exit(1);
        }
    };

    let request = TranslationRequest::new(code, source, target);

    let spinner = if cli.json {
        ProgressBar::hidden()
    } else {
        new_spinner(&format!(
            "Translating {} → {} with {}...",
            request.source_language(),
            request.target_language(),
            state.gateway.model()
        ))
    };
    let result = translate(state.gateway.as_ref(), &request).await;
    spinner.finish_and_clear();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_result(&request, &result, &theme));
    }

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

/// Collect source code from the positional args, a file, or stdin
fn read_source(cli: &Cli) -> anyhow::Result<Option<String>> {
    let code = match &cli.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
        None => cli.code.join(" "),
    };

    if code.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(code))
    }
}

fn new_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = config::log_filter_directive(&logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn print_status(config: &Config) {
    println!("{}", "ctrans Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Ollama URL: {}", config.ollama.base_url);
    println!("Model: {}", config.ollama.model);
    println!("Timeout: {}s", config.ollama.timeout_secs);
    println!(
        "Default languages: {} → {}",
        config.defaults.source_language, config.defaults.target_language
    );

    match OllamaGateway::new(&config.ollama) {
        Ok(gateway) => match gateway.model_info().await {
            Ok(_) => println!("Backend: {}", "model loaded".green()),
            Err(e) => println!(
                "Backend: {} ({}). Make sure Ollama is running.",
                "unavailable".yellow(),
                e
            ),
        },
        Err(e) => println!("Backend: {} ({})", "misconfigured".red(), e),
    }
}
