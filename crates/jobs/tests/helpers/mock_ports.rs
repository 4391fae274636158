use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use siteward_application::ports::{Clock, ConfigMutation, ConfigStore, Notifier};
use siteward_application::use_cases::GetUpcomingUnblocksUseCase;
use siteward_domain::{BlockedDomainRule, Configuration, DomainError, TimeWindow};
use std::sync::{Arc, Mutex};

pub struct StaticConfigStore {
    config: Arc<Configuration>,
}

impl StaticConfigStore {
    pub fn new(config: Configuration) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[async_trait]
impl ConfigStore for StaticConfigStore {
    fn snapshot(&self) -> Arc<Configuration> {
        self.config.clone()
    }

    async fn reload(&self) -> Result<Arc<Configuration>, DomainError> {
        Ok(self.config.clone())
    }

    async fn update(&self, _mutation: ConfigMutation) -> Result<Arc<Configuration>, DomainError> {
        Err(DomainError::StorageError("read-only store".to_string()))
    }
}

pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// 2026-10-16 is a Friday.
    pub fn friday(hour: u32, minute: u32) -> Self {
        let offset = FixedOffset::east_opt(0).unwrap();
        Self(offset.with_ymd_and_hms(2026, 10, 16, hour, minute, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[derive(Default)]
pub struct MockNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::IoError("notification service down".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

/// news.com blocked Fridays 9:00-12:00, titled "News".
pub fn news_until_noon() -> Configuration {
    Configuration {
        blocked_domains: vec![BlockedDomainRule::new("news.com")
            .with_title("News")
            .with_time_windows(vec![TimeWindow::new(vec![5], 9.0, 12.0)])],
        ..Default::default()
    }
}

pub fn upcoming_at(config: Configuration, clock: FixedClock) -> Arc<GetUpcomingUnblocksUseCase> {
    Arc::new(GetUpcomingUnblocksUseCase::new(
        Arc::new(StaticConfigStore::new(config)),
        Arc::new(clock),
        30,
    ))
}
