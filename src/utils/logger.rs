use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 本 crate 的過濾指令；`verbose` 至少開到 debug，其他 crate 維持 info
fn filter_directive(level: &str, verbose: bool) -> String {
    if verbose {
        let level = if level == "trace" { "trace" } else { "debug" };
        format!("kata_archive={},info", level)
    } else {
        format!("kata_archive={}", level)
    }
}

/// `RUST_LOG` 優先於設定檔
fn default_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)))
}

fn init_compact(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 伺服器以 JSON 格式輸出日誌，方便交給日誌收集器
fn init_json(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init_compact(default_filter(DEFAULT_LOG_LEVEL, verbose));
}

/// 依設定選擇日誌格式與等級
pub fn init_logger(format: &str, level: &str, verbose: bool) {
    let filter = default_filter(level, verbose);
    match format {
        "json" => init_json(filter),
        _ => init_compact(filter),
    }
}
