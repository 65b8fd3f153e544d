use crate::library::logger::interface::Logger;
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn format_line(&self, now: DateTime<Utc>, level: &str, message: &str) -> String {
        let local_time = now.with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        match &self.namespace {
            Some(namespace) => format!("[{}] {} {}: {}", formatted, level, namespace, message),
            None => format!("[{}] {} {}", formatted, level, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("{}", self.format_line(Utc::now(), "INFO", message));
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        eprintln!("{}", self.format_line(Utc::now(), "ERROR", message));
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line_with_nested_namespace() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let logger = LoggerConsole {
            namespace: Some("flow:classifier".to_string()),
            timezone: utc,
        };
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 13, 4, 5).unwrap();

        let line = logger.format_line(now, "INFO", "ready");

        assert_eq!(line, "[2024-05-01 01:04:05.000 PM] INFO flow:classifier: ready");
    }

    #[test]
    fn test_format_line_applies_timezone() {
        let logger = LoggerConsole::new(FixedOffset::west_opt(7 * 3600).unwrap());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap();

        let line = logger.format_line(now, "ERROR", "boom");

        assert_eq!(line, "[2024-05-01 06:00:00.000 AM] ERROR boom");
    }
}
