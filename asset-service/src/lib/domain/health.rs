use std::collections::BTreeMap;

use async_trait::async_trait;

/// Key/value health summary of the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HealthReport(BTreeMap<String, String>);

impl HealthReport {
    pub fn up(message: impl Into<String>) -> Self {
        let mut report = Self::default();
        report.insert("status", "up");
        report.insert("message", message);
        report
    }

    pub fn down(error: impl Into<String>) -> Self {
        let mut report = Self::default();
        report.insert("status", "down");
        report.insert("error", error);
        report
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_up(&self) -> bool {
        self.get("status") == Some("up")
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Store liveness probe.
#[async_trait]
pub trait HealthCheck: Send + Sync + 'static {
    async fn health(&self) -> HealthReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_and_down() {
        let up = HealthReport::up("It's healthy");
        assert!(up.is_up());
        assert_eq!(up.get("message"), Some("It's healthy"));

        let down = HealthReport::down("connection refused");
        assert!(!down.is_up());
        assert_eq!(down.get("error"), Some("connection refused"));
    }
}
