use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use siteward_application::ports::{BrowserTab, BrowserTabs, Clock, ConfigMutation, ConfigStore};
use siteward_domain::{
    BlockedDomainRule, Configuration, DomainError, ExceptionRule, LocalInstant, TimeWindow,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, RwLock};

// ── MockConfigStore ───────────────────────────────────────────────────────────

pub struct MockConfigStore {
    current: RwLock<Arc<Configuration>>,
    fail_writes: Mutex<bool>,
    writes: Mutex<usize>,
}

impl MockConfigStore {
    pub fn new() -> Self {
        Self::with_configuration(Configuration::default())
    }

    pub fn with_configuration(config: Configuration) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
            fail_writes: Mutex::new(false),
            writes: Mutex::new(0),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl Default for MockConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for MockConfigStore {
    fn snapshot(&self) -> Arc<Configuration> {
        self.current.read().unwrap().clone()
    }

    async fn reload(&self) -> Result<Arc<Configuration>, DomainError> {
        Ok(self.snapshot())
    }

    async fn update(&self, mutation: ConfigMutation) -> Result<Arc<Configuration>, DomainError> {
        let mut next = self.snapshot().as_ref().clone();
        mutation(&mut next)?;

        if *self.fail_writes.lock().unwrap() {
            return Err(DomainError::IoError("disk full".to_string()));
        }

        let next = Arc::new(next);
        *self.current.write().unwrap() = next.clone();
        *self.writes.lock().unwrap() += 1;
        Ok(next)
    }
}

// ── FixedClock ────────────────────────────────────────────────────────────────

pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// 2026-10-12 is a Monday, so `day` 12..=18 walks Monday..Sunday.
    pub fn october_2026(day: u32, hour: u32, minute: u32) -> Self {
        let offset = FixedOffset::east_opt(0).unwrap();
        Self {
            now: offset
                .with_ymd_and_hms(2026, 10, day, hour, minute, 0)
                .unwrap(),
        }
    }

    pub fn wednesday_10am() -> Self {
        Self::october_2026(14, 10, 0)
    }

    pub fn saturday_10am() -> Self {
        Self::october_2026(17, 10, 0)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

// ── MockBrowserTabs ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockBrowserTabs {
    tabs: Mutex<Vec<BrowserTab>>,
    redirects: Mutex<Vec<(i64, String)>>,
    failing: Mutex<HashSet<i64>>,
}

impl MockBrowserTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tabs(tabs: Vec<(i64, &str)>) -> Self {
        let registry = Self::new();
        *registry.tabs.lock().unwrap() = tabs
            .into_iter()
            .map(|(id, url)| BrowserTab::new(id, url))
            .collect();
        registry
    }

    pub fn fail_redirects_for(&self, tab_id: i64) {
        self.failing.lock().unwrap().insert(tab_id);
    }

    pub fn redirects(&self) -> Vec<(i64, String)> {
        self.redirects.lock().unwrap().clone()
    }

    pub fn tab_url(&self, tab_id: i64) -> Option<String> {
        self.tabs
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == tab_id)
            .map(|t| t.url.clone())
    }
}

#[async_trait]
impl BrowserTabs for MockBrowserTabs {
    async fn list_tabs(&self) -> Result<Vec<BrowserTab>, DomainError> {
        Ok(self.tabs.lock().unwrap().clone())
    }

    async fn track_tab(&self, tab: BrowserTab) -> Result<(), DomainError> {
        let mut tabs = self.tabs.lock().unwrap();
        match tabs.iter_mut().find(|t| t.id == tab.id) {
            Some(existing) => existing.url = tab.url,
            None => tabs.push(tab),
        }
        Ok(())
    }

    async fn redirect(&self, tab_id: i64, url: &str) -> Result<(), DomainError> {
        if self.failing.lock().unwrap().contains(&tab_id) {
            return Err(DomainError::NotFound(format!("Tab {} is gone", tab_id)));
        }
        self.redirects
            .lock()
            .unwrap()
            .push((tab_id, url.to_string()));
        Ok(())
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

pub fn weekdays(start_hour: f64, end_hour: f64) -> TimeWindow {
    TimeWindow::new(vec![1, 2, 3, 4, 5], start_hour, end_hour)
}

pub fn at(day_of_week: u8, hour_of_day: f64) -> LocalInstant {
    LocalInstant::new(day_of_week, hour_of_day)
}

/// youtube.com always blocked, one video allowed on weekdays 8:00-17:00.
pub fn youtube_configuration() -> Configuration {
    Configuration {
        blocked_domains: vec![BlockedDomainRule::new("youtube.com")],
        exception_urls: vec![ExceptionRule::new(
            "https://youtube.com/watch?v=1",
            vec![weekdays(8.0, 17.0)],
        )],
        site_notes: Vec::new(),
    }
}

pub fn store_with(config: Configuration) -> Arc<MockConfigStore> {
    Arc::new(MockConfigStore::with_configuration(config))
}

impl MockConfigStore {
    pub fn snapshot_is_empty(&self) -> bool {
        let config = self.current.read().unwrap();
        config.blocked_domains.is_empty()
            && config.exception_urls.is_empty()
            && config.site_notes.is_empty()
    }
}
