// ==========================================
// 承运商分配队列 - 批处理入口
// ==========================================
// 用法: award-queue [db_path]
// 输出: RunSummary JSON（stdout）; 失败时非零退出
// ==========================================

use anyhow::Context;
use std::sync::{Arc, Mutex};
use tsp_award_queue::config::{AwardQueueConfig, ConfigManager};
use tsp_award_queue::db::{get_default_db_path, init_schema, open_sqlite_connection};
use tsp_award_queue::engine::{AwardQueue, AwardQueueRepositories, TracingQueueLogger};
use tsp_award_queue::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", tsp_award_queue::APP_NAME, tsp_award_queue::VERSION);
    tracing::info!("==================================================");

    let arg = std::env::args().nth(1);
    let db_path = get_default_db_path(arg.as_deref());
    tracing::info!("使用数据库: {}", db_path);

    let conn = open_sqlite_connection(&db_path)
        .with_context(|| format!("无法打开数据库: {}", db_path))?;
    init_schema(&conn).context("初始化数据库结构失败")?;
    let conn = Arc::new(Mutex::new(conn));

    let config_manager = ConfigManager::from_connection(conn.clone())?;
    let config = AwardQueueConfig::load(&config_manager)
        .await
        .context("读取分配队列配置失败")?;
    tracing::info!(
        minimum_performance_score = config.minimum_performance_score,
        awards_per_band = ?config.awards_per_band,
        "配置加载完成"
    );

    let repos = AwardQueueRepositories::new(conn);
    let queue = AwardQueue::new(&repos, &config, Arc::new(TracingQueueLogger));

    // 引擎为同步阻塞实现
    let summary = tokio::task::spawn_blocking(move || queue.run())
        .await
        .context("分配队列任务异常退出")??;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
