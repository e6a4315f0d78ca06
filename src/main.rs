use anyhow::Result;
use env_logger::Env;
use settings_labels::config::AppConfig;
use settings_labels::labels::{LabelResolver, SettingCategory};

const DEFAULT_CONFIG_PATH: &str = "Config.toml";

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // Load config or create default if not exists
    let config = AppConfig::load_or_create(&config_path)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration {}: {}", config_path, e))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .format_timestamp_millis()
        .init();

    for category in config.blog.unrecognized() {
        log::warn!(
            "unrecognized {:?} value '{}', it will be shown as is",
            category,
            config.blog.raw(category)
        );
    }

    let resolver = LabelResolver::shared(config.language);
    log::info!("describing settings in {}", config.language.display_name());

    for category in SettingCategory::all() {
        let current = config.blog.raw(*category);
        println!("{}", resolver.title(*category));
        for (token, label) in resolver.choices(*category) {
            let marker = if token == current { '*' } else { ' ' };
            println!("  {} {:<8} {}", marker, token, label);
        }
        println!("  = {}", resolver.label(*category, current));
        println!();
    }

    Ok(())
}
