use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Info,
    Error,
}

/// Transient message about the last action's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self::at(BannerKind::Info, message, Utc::now())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at(BannerKind::Error, message, Utc::now())
    }

    pub fn at(kind: BannerKind, message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now - self.raised_at >= ttl,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let raised = Utc::now();
        let banner = Banner::at(BannerKind::Error, "Failed to save", raised);
        let ttl = Duration::from_secs(8);
        assert!(!banner.is_expired(raised + chrono::Duration::seconds(7), ttl));
        assert!(banner.is_expired(raised + chrono::Duration::seconds(8), ttl));
        assert!(banner.is_error());
    }
}
