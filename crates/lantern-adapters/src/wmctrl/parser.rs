use lantern_core::domain::{WindowRecord, NO_WORKSPACE};
use tracing::{trace, warn};

const WINDOW_FIELDS: usize = 5;
const ACTIVE_DESKTOP_MARKER: &str = "*";

/// Parses `wmctrl -l -x` output.
///
/// Each line reads `<id> <workspace> <class> <host> <title>`; the title may
/// contain spaces or be missing. Sticky windows (workspace `-1`) are left out.
pub fn parse_window_list(output: &str) -> Vec<WindowRecord> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_window_line)
        .filter(|window| window.workspace != NO_WORKSPACE)
        .collect()
}

fn parse_window_line(line: &str) -> Option<WindowRecord> {
    let fields = split_fields(line, WINDOW_FIELDS);

    match fields.as_slice() {
        [id, workspace, class_name, host, rest @ ..] => {
            let title = rest.first().copied().unwrap_or_default();
            trace!(id, workspace, class_name, "parsed window");
            Some(WindowRecord::new(*id, *workspace, *class_name, title).with_host(*host))
        }
        _ => {
            warn!(line, "skipping malformed wmctrl line");
            None
        }
    }
}

/// Parses `wmctrl -d` output, returning the desktop marked active with `*`.
pub fn parse_current_workspace(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let mut columns = line.split_whitespace();
        let workspace = columns.next()?;
        (columns.next()? == ACTIVE_DESKTOP_MARKER).then(|| workspace.to_string())
    })
}

/// Splits on whitespace runs into at most `count` fields; the last field keeps
/// its inner and trailing whitespace.
fn split_fields(line: &str, count: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(count);
    let mut rest = line.trim_start();

    while !rest.is_empty() && fields.len() + 1 < count {
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                rest = "";
            }
        }
    }

    if !rest.is_empty() {
        fields.push(rest);
    }

    fields
}
