#![allow(dead_code)]
use siteward_domain::{
    BlockedDomainRule, Configuration, ExceptionRule, LocalInstant, TimeWindow,
};

pub const SUNDAY: u8 = 0;
pub const MONDAY: u8 = 1;
pub const TUESDAY: u8 = 2;
pub const WEDNESDAY: u8 = 3;
pub const THURSDAY: u8 = 4;
pub const FRIDAY: u8 = 5;
pub const SATURDAY: u8 = 6;

pub fn window(days: &[u8], start_hour: f64, end_hour: f64) -> TimeWindow {
    TimeWindow::new(days.to_vec(), start_hour, end_hour)
}

pub fn weekdays_8_to_17() -> TimeWindow {
    window(&[MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY], 8.0, 17.0)
}

pub fn at(day: u8, hour: f64) -> LocalInstant {
    LocalInstant::new(day, hour)
}

pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            config: Configuration::default(),
        }
    }

    pub fn block(mut self, domain: &str) -> Self {
        self.config
            .blocked_domains
            .push(BlockedDomainRule::new(domain));
        self
    }

    pub fn block_during(mut self, domain: &str, windows: Vec<TimeWindow>) -> Self {
        self.config
            .blocked_domains
            .push(BlockedDomainRule::new(domain).with_time_windows(windows));
        self
    }

    pub fn rule(mut self, rule: BlockedDomainRule) -> Self {
        self.config.blocked_domains.push(rule);
        self
    }

    pub fn except(mut self, url: &str, windows: Vec<TimeWindow>) -> Self {
        self.config
            .exception_urls
            .push(ExceptionRule::new(url, windows));
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
