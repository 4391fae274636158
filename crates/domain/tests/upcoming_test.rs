use siteward_domain::upcoming::{DEFAULT_LEAD_MINUTES, UNBLOCK_NOTIFICATION_TITLE};
use siteward_domain::{upcoming_unblocks, BlockedDomainRule, UpcomingUnblock};

mod helpers;
use helpers::*;

#[test]
fn test_reports_window_ending_within_lead() {
    let config = ConfigurationBuilder::new()
        .block_during("news.com", vec![window(&[MONDAY], 9.0, 12.0)])
        .build();

    let upcoming = upcoming_unblocks(&config, at(MONDAY, 11.75), DEFAULT_LEAD_MINUTES);

    assert_eq!(
        upcoming,
        vec![UpcomingUnblock {
            label: "news.com".to_string(),
            minutes_until_free: 15,
        }]
    );
}

#[test]
fn test_uses_title_as_label() {
    let config = ConfigurationBuilder::new()
        .rule(
            BlockedDomainRule::new("news.com")
                .with_title("News sites")
                .with_time_windows(vec![window(&[MONDAY], 9.0, 12.0)]),
        )
        .build();

    let upcoming = upcoming_unblocks(&config, at(MONDAY, 11.5), 30);

    assert_eq!(upcoming[0].label, "News sites");
    assert_eq!(upcoming[0].minutes_until_free, 30);
    assert_eq!(
        upcoming[0].notification_body(),
        "News sites will be available in 1 minute!"
    );
    assert_eq!(upcoming[0].key(), "News sites-30");
}

#[test]
fn test_ignores_windows_ending_later_than_lead() {
    let config = ConfigurationBuilder::new()
        .block_during("news.com", vec![window(&[MONDAY], 9.0, 12.0)])
        .build();

    assert!(upcoming_unblocks(&config, at(MONDAY, 10.0), 30).is_empty());
}

#[test]
fn test_ignores_inactive_windows() {
    let config = ConfigurationBuilder::new()
        .block_during("news.com", vec![window(&[MONDAY], 9.0, 12.0)])
        .build();

    assert!(upcoming_unblocks(&config, at(TUESDAY, 11.9), 30).is_empty());
    assert!(upcoming_unblocks(&config, at(MONDAY, 12.0), 30).is_empty());
}

#[test]
fn test_always_blocked_domains_are_never_reported() {
    let config = ConfigurationBuilder::new().block("youtube.com").build();

    assert!(upcoming_unblocks(&config, at(MONDAY, 23.9), 30).is_empty());
}

#[test]
fn test_reports_each_active_window() {
    let config = ConfigurationBuilder::new()
        .block_during("a.com", vec![window(&[FRIDAY], 8.0, 17.0)])
        .block_during(
            "b.com",
            vec![window(&[FRIDAY], 16.0, 17.0), window(&[FRIDAY], 10.0, 16.9)],
        )
        .build();

    let upcoming = upcoming_unblocks(&config, at(FRIDAY, 16.5), 30);

    assert_eq!(upcoming.len(), 3);
    assert_eq!(upcoming[0].minutes_until_free, 30);
    assert_eq!(upcoming[2].label, "b.com");
    assert_eq!(upcoming[2].minutes_until_free, 24);
}

#[test]
fn test_notification_title() {
    assert_eq!(UNBLOCK_NOTIFICATION_TITLE, "Access unlocked soon");
}
