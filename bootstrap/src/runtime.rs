//! 日志初始化与停机信号

use std::future::pending;

use kasir_config::AppConfig;
use kasir_telemetry::{init_tracing, init_tracing_json};
use tracing::{info, warn};

/// 按环境选择日志格式，生产环境输出 JSON
pub fn init_runtime(config: &AppConfig) {
    let level = config.telemetry.log_level.as_str();
    if config.is_production() {
        init_tracing_json(level);
    } else {
        init_tracing(level);
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        log_level = level,
        "Logging ready"
    );
}

/// 收到 Ctrl-C 或 SIGTERM 时返回
///
/// 信号处理器注册失败时只记录警告，对应的信号不再触发停机
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl-C handler unavailable");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        _ = interrupt => info!("Interrupt received, draining connections"),
        _ = terminate => info!("SIGTERM received, draining connections"),
    }
}
