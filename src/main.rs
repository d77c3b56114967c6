use chrono::Datelike;
use clap::Parser;
use kata_archive::app::kata_runner::run_kata;
use kata_archive::config::KataCommand;
use kata_archive::utils::logger;
use kata_archive::KataCli;
use serde_json::Value;

/// `list` 的結果以表格輸出
fn print_kata_table(value: &Value) {
    for entry in value.as_array().into_iter().flatten() {
        println!(
            "{:<16} {}",
            entry["name"].as_str().unwrap_or_default(),
            entry["summary"].as_str().unwrap_or_default()
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = KataCli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let current_year = chrono::Local::now().year();

    match run_kata(&cli.command, current_year) {
        Ok(value) if matches!(cli.command, KataCommand::List) => {
            print_kata_table(&value);
        }
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Kata failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
