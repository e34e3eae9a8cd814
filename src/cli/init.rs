use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};

pub async fn run(config: AppConfig) -> Result<()> {
    println!("Initializing db...");
    if let Some(parent) = Path::new(&config.db_path).parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|err| println!("Ignoring db directory create failed: {}", err));
    }

    let db = async_db(&config.db_path).await?;
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await?;
    println!("Finished initializing db at {}", config.db_path);

    Ok(())
}
