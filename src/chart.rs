// Chart renderer: one line per bucket, a fixed-width label, a `|`
// separator, then one `=` per counted post. No scaling.

use crate::buckets::BucketSet;
use crate::cli::Mode;

/// Width weekday labels are padded to before the separator.
pub const WEEKDAY_LABEL_WIDTH: usize = 11;

const BAR_CHAR: &str = "=";

fn bar_line(mode: Mode, label: &str, count: usize) -> String {
    let bar = BAR_CHAR.repeat(count);
    match mode {
        Mode::ByWeekday => format!("{:<width$}|{}", label, bar, width = WEEKDAY_LABEL_WIDTH),
        Mode::ByHour => format!("{} |{}", label, bar),
    }
}

/// Chart lines, including the blank line before and after the bars.
pub fn render_lines(buckets: &BucketSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(buckets.len() + 2);
    lines.push(String::new());
    lines.extend(
        buckets
            .iter()
            .map(|(label, count)| bar_line(buckets.mode(), label, count)),
    );
    lines.push(String::new());
    lines
}

/// The whole chart as printable text, newline-terminated.
pub fn render(buckets: &BucketSet) -> String {
    let mut out = render_lines(buckets).join("\n");
    out.push('\n');
    out
}
