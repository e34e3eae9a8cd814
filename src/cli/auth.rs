use anyhow::Result;

use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::google::oauth::interactive_auth_flow;

pub async fn run(config: AppConfig) -> Result<()> {
    let db = async_db(&config.db_path).await?;
    interactive_auth_flow(&config, &db).await
}
