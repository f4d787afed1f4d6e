use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::health::HealthCheck;
use crate::domain::health::HealthReport;

const PING_TIMEOUT: Duration = Duration::from_secs(1);
const HEAVY_LOAD_CONNECTIONS: u32 = 40;

pub struct PostgresHealthCheck {
    pool: PgPool,
}

impl PostgresHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PostgresHealthCheck {
    async fn health(&self) -> HealthReport {
        let ping = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&self.pool);

        let mut report = match tokio::time::timeout(PING_TIMEOUT, ping).await {
            Ok(Ok(_)) => HealthReport::up("It's healthy"),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Database health check failed");
                HealthReport::down(format!("db down: {}", e))
            }
            Err(_) => {
                tracing::error!(timeout_ms = PING_TIMEOUT.as_millis(), "Database health check timed out");
                HealthReport::down("db down: ping timed out")
            }
        };

        let size = self.pool.size();
        let idle = self.pool.num_idle() as u32;
        report.insert("open_connections", size.to_string());
        report.insert("idle", idle.to_string());
        report.insert("in_use", size.saturating_sub(idle).to_string());

        if report.is_up() && size.saturating_sub(idle) > HEAVY_LOAD_CONNECTIONS {
            report.insert("message", "The database is experiencing heavy load.");
        }

        report
    }
}
