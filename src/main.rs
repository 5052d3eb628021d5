use clap::Parser;
use gce_backup_report::utils::{logger, validation::Validate};
use gce_backup_report::{
    BackupReportPipeline, CliConfig, GcloudCompute, LocalStorage, ReportEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gce-backup-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let config = match config.with_file_overlay() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Could not load config file: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // The only external dependency is the compute CLI itself; fail fast with
    // an install instruction when it is absent.
    let api = GcloudCompute::new(config.gcloud_bin.clone());
    if let Err(e) = api.check_available().await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = BackupReportPipeline::new(storage, config, api);

    let engine = ReportEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Backup report completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Backup report completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Backup report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                gce_backup_report::utils::error::ErrorSeverity::Low => 0,
                gce_backup_report::utils::error::ErrorSeverity::Medium => 2,
                gce_backup_report::utils::error::ErrorSeverity::High => 1,
                gce_backup_report::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
