use clap::Parser;
use display_helpers::utils::error::ErrorSeverity;
use display_helpers::utils::{logger, validation::Validate};
use display_helpers::{
    convert_months_to_years_and_months, download_json, download_value, format_label,
    number_with_commas, upload_json, CliConfig, Command, HelperError, LocalPicker, LocalStorage,
    TomlConfig,
};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_json);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    if let Err(e) = run(cli.command, &config).await {
        exit_with(e);
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> display_helpers::Result<TomlConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    if let Some(locale) = &cli.locale {
        config.set_locale(locale.clone());
        tracing::debug!("🔧 Locale overridden to: {}", locale);
    }

    config.validate()?;
    Ok(config)
}

async fn run(command: Command, config: &TomlConfig) -> display_helpers::Result<()> {
    let formats = config.format_config()?;

    match command {
        Command::Label { key } => println!("{}", format_label(&key)),
        Command::Tenure { months } => {
            println!(
                "{}",
                convert_months_to_years_and_months(months, &formats.duration)?
            )
        }
        Command::Number { value } => println!("{}", number_with_commas(value, &formats.number)),
        Command::Export {
            content,
            filename,
            output_dir,
            pretty,
        } => {
            let content = match content.as_deref() {
                None | Some("-") => {
                    let mut buf = String::new();
                    tokio::io::stdin().read_to_string(&mut buf).await?;
                    buf
                }
                Some(text) => text.to_string(),
            };

            let storage =
                LocalStorage::new(output_dir.unwrap_or_else(|| config.output_dir().to_string()));
            let filename = filename.unwrap_or_else(|| config.default_filename().to_string());

            let saved = if pretty {
                let value: serde_json::Value = serde_json::from_str(&content)?;
                download_value(&storage, &value, Some(&filename), true).await?
            } else {
                download_json(&storage, &content, Some(&filename)).await?
            };
            println!("{}", saved.display());
        }
        Command::Import { path, pretty } => {
            let picker = LocalPicker::new(path);
            let value = upload_json(&picker).await?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn exit_with(e: HelperError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4, // dismissed prompt
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
