use anyhow::Context;
use clap::Parser;
use kata_archive::app::lessons::fs_lessons;
use kata_archive::config::LessonCommand;
use kata_archive::utils::{logger, validation::Validate};
use kata_archive::{
    FileServer, Handler, HttpClient, HttpServer, JsonApiServer, KataError, LessonConfig,
    NodeschoolCli, TimeServer, UppercaseServer,
};
use std::path::PathBuf;
use tokio::net::TcpListener;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Ctrl-C received");
}

async fn serve_http<H: Handler>(
    config: &LessonConfig,
    bind: Option<&str>,
    handler: H,
) -> kata_archive::Result<()> {
    let addr = config.bind_addr(bind)?;
    let server = HttpServer::bind(addr, handler, config.server_settings()).await?;
    println!("🚀 Listening on http://{}", server.local_addr()?);
    server.run_until(shutdown_signal()).await
}

async fn run(cli: NodeschoolCli, config: LessonConfig) -> kata_archive::Result<()> {
    match cli.command {
        LessonCommand::TimeServer { bind } => {
            let addr = config.bind_addr(bind.as_deref())?;
            let listener = TcpListener::bind(addr).await?;
            println!("🚀 Time server listening on {}", listener.local_addr()?);
            TimeServer::new().run_until(listener, shutdown_signal()).await
        }
        LessonCommand::FileServer { bind, file } => {
            let path: PathBuf = match file {
                Some(path) => path,
                None => config
                    .file_path()
                    .map(PathBuf::from)
                    .ok_or_else(|| KataError::MissingConfigError {
                        field: "file_server.path (or --file)".to_string(),
                    })?,
            };
            let handler = FileServer::new(path).await?;
            serve_http(&config, bind.as_deref(), handler).await
        }
        LessonCommand::UppercaseServer { bind } => {
            serve_http(&config, bind.as_deref(), UppercaseServer).await
        }
        LessonCommand::JsonApiServer { bind } => {
            serve_http(&config, bind.as_deref(), JsonApiServer).await
        }
        LessonCommand::Get { url } => {
            let client = HttpClient::new(config.client_timeout())?;
            for line in client.get_lines(&url).await? {
                println!("{}", line);
            }
            Ok(())
        }
        LessonCommand::Collect { url } => {
            let client = HttpClient::new(config.client_timeout())?;
            let collected = client.collect(&url).await?;
            println!("{}", collected.char_count);
            println!("{}", collected.body);
            Ok(())
        }
        LessonCommand::Juggle { urls } => {
            let client = HttpClient::new(config.client_timeout())?;
            for body in client.juggle(&urls).await? {
                println!("{}", body);
            }
            Ok(())
        }
        LessonCommand::CountLines { path } => {
            println!("{}", fs_lessons::count_newlines(&path).await?);
            Ok(())
        }
        LessonCommand::Ls { dir, extension } => {
            for name in fs_lessons::filtered_ls(&dir, &extension).await? {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = NodeschoolCli::parse();

    let config = match &cli.config {
        Some(path) => LessonConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => LessonConfig::default(),
    };

    // 初始化日誌
    logger::init_logger(config.log_format(), config.log_level(), cli.verbose);

    tracing::info!("🚀 Starting nodeschool lessons");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(cli, config).await {
        tracing::error!(
            "❌ Lesson failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
