use chrono::{Local, TimeZone};
use std::cell::RefCell;
use twitterfreq::api::{decode_timeline, Post, PostSource};
use twitterfreq::buckets::CREATED_AT_FORMAT;
use twitterfreq::cli::{parse_args, Command, Config, Mode};
use twitterfreq::error::{ClassifyError, FetchError, ReportError};
use twitterfreq::ui::{failure_message, run_report};

/// In-memory post source that records which accounts were requested.
struct FakeSource {
    posts: Option<Vec<Post>>,
    requested: RefCell<Vec<String>>,
}

impl FakeSource {
    fn with_posts(posts: Vec<Post>) -> Self {
        FakeSource {
            posts: Some(posts),
            requested: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        FakeSource {
            posts: None,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl PostSource for FakeSource {
    fn recent_posts(&self, account: &str) -> Result<Vec<Post>, FetchError> {
        self.requested.borrow_mut().push(account.to_string());
        match &self.posts {
            Some(posts) => Ok(posts.clone()),
            None => Err(FetchError::Status {
                status: 401,
                body: r#"{"errors":[{"code":89,"message":"Invalid or expired token."}]}"#.into(),
            }),
        }
    }
}

/// A post created at the given local wall-clock time on Monday 2024-03-04.
fn local_post(id: &str, hour: u32, minute: u32) -> Post {
    let time = Local
        .with_ymd_and_hms(2024, 3, 4, hour, minute, 0)
        .single()
        .unwrap();
    Post {
        id: id.to_string(),
        created_at: Some(time.format(CREATED_AT_FORMAT).to_string()),
    }
}

fn config(args: &[&str]) -> Config {
    match parse_args(args) {
        Command::Run(config) => config,
        Command::Help => panic!("expected a run configuration for {:?}", args),
    }
}

#[test]
fn hourly_report_end_to_end() {
    let config = config(&["-d", "alice"]);
    assert_eq!(config.mode, Mode::ByHour);

    let source = FakeSource::with_posts(vec![
        local_post("1", 9, 15),
        local_post("2", 9, 40),
        local_post("3", 14, 2),
    ]);
    let mut out = Vec::new();
    let buckets = run_report(&config, &source, &mut out).unwrap();

    assert_eq!(buckets.get("09:00"), Some(2));
    assert_eq!(buckets.get("14:00"), Some(1));
    assert_eq!(buckets.total(), 3);
    assert_eq!(source.requested.borrow().as_slice(), ["alice"]);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Getting alice's last 200 posts...");
    assert_eq!(lines[1], "Sorting alice's posts...");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "00:00 |");
    assert!(lines.contains(&"09:00 |=="));
    assert!(lines.contains(&"14:00 |="));
    assert_eq!(lines.last(), Some(&""));
    assert_eq!(lines.len(), 2 + 24 + 2);
}

#[test]
fn weekly_report_is_the_default() {
    let config = config(&["alice"]);
    assert_eq!(config.mode, Mode::ByWeekday);

    let source = FakeSource::with_posts(vec![local_post("1", 12, 0), local_post("2", 13, 0)]);
    let mut out = Vec::new();
    run_report(&config, &source, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\nMonday     |==\n"));
    assert!(text.contains("\nSunday     |\n"));
    assert!(text.ends_with("Saturday   |\n\n"));
}

#[test]
fn empty_timeline_still_draws_every_bucket() {
    let source = FakeSource::with_posts(Vec::new());
    let mut out = Vec::new();
    let buckets = run_report(&config(&["-w", "quiet"]), &source, &mut out).unwrap();
    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets.total(), 0);
}

#[test]
fn fetch_failure_stops_before_sorting() {
    let source = FakeSource::failing();
    let mut out = Vec::new();
    let err = run_report(&config(&["alice"]), &source, &mut out).unwrap_err();

    assert!(matches!(&err, ReportError::Fetch { account, .. } if account == "alice"));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Getting alice's last 200 posts...\n");

    let msg = failure_message(&err);
    assert!(msg.contains("alice"));
    assert!(msg.contains("Possible causes"));
}

#[test]
fn malformed_timestamp_fails_without_a_chart() {
    let source = FakeSource::with_posts(vec![
        local_post("1", 8, 0),
        Post {
            id: "2".into(),
            created_at: Some("yesterday".into()),
        },
    ]);
    let mut out = Vec::new();
    let err = run_report(&config(&["-d", "alice"]), &source, &mut out).unwrap_err();

    assert!(matches!(&err, ReportError::Classify(e) if e.post_id() == "2"));
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains('|'));
}

#[test]
fn post_without_timestamp_is_a_sorting_failure_not_a_fetch_failure() {
    let timeline = r#"[
        {"id_str": "1", "created_at": "Mon Mar 04 09:15:00 +0000 2024"},
        {"id_str": "2"}
    ]"#;
    let source = FakeSource::with_posts(decode_timeline(timeline).unwrap());
    let mut out = Vec::new();
    let err = run_report(&config(&["alice"]), &source, &mut out).unwrap_err();

    assert!(matches!(&err, ReportError::Classify(ClassifyError::Missing { post_id }) if post_id == "2"));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Sorting alice's posts..."));
    assert!(!text.contains('|'));

    let msg = failure_message(&err);
    assert!(msg.contains("\"2\" has no creation time"));
    assert!(!msg.contains("Possible causes"));
}

#[test]
fn help_paths_never_build_a_config() {
    let empty: [&str; 0] = [];
    let cases: [&[&str]; 4] = [&empty, &["-h"], &["-x", "alice"], &["-d", "a", "b"]];
    for args in cases {
        assert_eq!(parse_args(args), Command::Help);
    }
}
