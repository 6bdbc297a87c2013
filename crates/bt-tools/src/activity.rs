use std::fmt::Write as _;

use bt_core::{AccessMode, ActivityFilter, ActivityRecord, Blackboard, UNATTRIBUTED};

use crate::style::{paint, ActivityStyle, BLUE, BOLD, GREEN};

const NO_EXPANSION: &str = "<<NoExpansion>>";

/// Render activity records, one newline-terminated line each.
///
/// ```text
/// >> WRITE [FollowLane]............... distance_to_goal : 4.0
/// >> READ  [FollowLane]............... distance_to_goal
/// ```
pub fn render_activity<'a>(
    records: impl IntoIterator<Item = &'a ActivityRecord>,
    style: &ActivityStyle,
) -> String {
    let mut out = String::new();
    for record in records {
        let client = record.client.as_deref().unwrap_or(UNATTRIBUTED);
        let dots = ".".repeat(style.cell_width.saturating_sub(client.chars().count()));
        let client = paint(client, BOLD, style.color);
        // Writing into a String cannot fail.
        let _ = match record.mode {
            AccessMode::Write => {
                let value = match &record.value {
                    Some(v) if v.is_scalar() || style.expand => v.to_string(),
                    Some(_) => NO_EXPANSION.to_string(),
                    None => String::new(),
                };
                writeln!(
                    out,
                    ">> {} [{client}]{dots} {} : {value}",
                    paint("WRITE", BLUE, style.color),
                    record.key
                )
            }
            AccessMode::Read => writeln!(
                out,
                ">> {}  [{client}]{dots} {}",
                paint("READ", GREEN, style.color),
                record.key
            ),
        };
    }
    out
}

/// Filter the blackboard log and render the matches.
pub fn activity_report(
    blackboard: &Blackboard,
    filter: &ActivityFilter,
    style: &ActivityStyle,
) -> String {
    render_activity(blackboard.get_activity(filter), style)
}
