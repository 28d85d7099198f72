// Bucketizer: assigns every post to exactly one hour-of-day or
// day-of-week slot and keeps a count per slot.

use crate::api::Post;
use crate::cli::Mode;
use crate::error::ClassifyError;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use tracing::debug;

/// Timestamp layout used by the timeline endpoint.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const HOURS: [&str; 24] = [
    "00:00", "01:00", "02:00", "03:00", "04:00", "05:00", "06:00", "07:00", "08:00", "09:00",
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00",
    "20:00", "21:00", "22:00", "23:00",
];

impl Mode {
    /// Bucket labels in display order.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Mode::ByHour => &HOURS,
            Mode::ByWeekday => &WEEKDAYS,
        }
    }
}

/// Ordered label -> count mapping. Always holds one entry per label of its
/// mode, even when no post was counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSet {
    mode: Mode,
    counts: Vec<usize>,
}

impl BucketSet {
    pub fn new(mode: Mode) -> Self {
        BucketSet {
            mode,
            counts: vec![0; mode.labels().len()],
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `label`, or `None` if the label is not part of this mode.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.mode
            .labels()
            .iter()
            .position(|l| *l == label)
            .map(|i| self.counts[i])
    }

    /// Number of posts counted across all buckets.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(label, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.mode
            .labels()
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
    }

    /// Count one post created at `time`.
    pub fn add<Tz: TimeZone>(&mut self, time: &DateTime<Tz>) {
        let index = match self.mode {
            Mode::ByHour => time.hour() as usize,
            Mode::ByWeekday => time.weekday().num_days_from_sunday() as usize,
        };
        self.counts[index] += 1;
    }
}

/// Parse a post's creation time.
pub fn created_at(post: &Post) -> Result<DateTime<chrono::FixedOffset>, ClassifyError> {
    let raw = post.created_at.as_deref().ok_or_else(|| ClassifyError::Missing {
        post_id: post.id.clone(),
    })?;
    DateTime::parse_from_str(raw, CREATED_AT_FORMAT).map_err(|source| ClassifyError::Unreadable {
        post_id: post.id.clone(),
        raw: raw.to_string(),
        source,
    })
}

/// Classify `posts` in the machine's local time zone.
pub fn tally(mode: Mode, posts: &[Post]) -> Result<BucketSet, ClassifyError> {
    tally_in(mode, posts, &Local)
}

/// Classify `posts` after converting their timestamps to `tz`. The first
/// missing or unreadable timestamp aborts the whole tally.
pub fn tally_in<Tz: TimeZone>(
    mode: Mode,
    posts: &[Post],
    tz: &Tz,
) -> Result<BucketSet, ClassifyError> {
    let mut buckets = BucketSet::new(mode);
    for post in posts {
        let local = created_at(post)?.with_timezone(tz);
        buckets.add(&local);
    }
    debug!(?mode, posts = posts.len(), counted = buckets.total(), "tallied posts");
    Ok(buckets)
}
