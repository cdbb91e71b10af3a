//! Plain-text rendering of fetch state and pagination controls.

use kaleo_utils::pagination::{ControlSet, FetchState, PageInfo, PageStrategy};

/// Render a list screen's fetch state.
///
/// The three terminal situations are deliberately distinct: still loading,
/// confirmed empty, and failed with a retry hint.
pub fn render_state<T>(
    title: &str,
    state: &FetchState<T>,
    strategy: &dyn PageStrategy,
    render_row: fn(&T) -> String,
) -> String {
    match state {
        FetchState::Idle | FetchState::Loading => format!("{title}\n  Loading..."),
        FetchState::Failed(error) => {
            format!("{title}\n  Error: {error}\n  Type `retry` to try again.")
        }
        FetchState::Loaded(page) if page.total_items == 0 => {
            format!("{title}\n  No results.")
        }
        FetchState::Loaded(page) => {
            let mut out = String::new();
            out.push_str(title);

            for item in &page.items {
                out.push_str("\n  ");
                out.push_str(&render_row(item));
            }

            let footer = render_controls(page.info(), strategy);
            if !footer.is_empty() {
                out.push('\n');
                out.push_str(&footer);
            }

            out
        }
    }
}

/// Render the footer line for a loaded page.
pub fn render_controls(info: PageInfo, strategy: &dyn PageStrategy) -> String {
    let controls = strategy.compute_controls(info);
    if controls.is_empty() {
        return String::new();
    }

    let mut out = String::new();

    if let Some((start, end)) = controls.display_range {
        out.push_str(&format!(
            "Showing {start} to {end} of {} results",
            info.total_items
        ));
        out.push_str("\n  ");
    }

    out.push_str(&nav_line(&controls, info));
    out
}

/// Build the navigation line: arrows plus page numbers when present.
fn nav_line(controls: &ControlSet, info: PageInfo) -> String {
    let mut parts: Vec<String> = Vec::new();

    if controls.can_first {
        parts.push("|<".to_owned());
    }
    if controls.can_prev {
        parts.push("<".to_owned());
    }

    if controls.pages.is_empty() {
        parts.push(format!("Page {}/{}", info.page_index + 1, info.total_pages.max(1)));
    } else {
        for button in &controls.pages {
            if button.active {
                parts.push(format!("[{}]", button.display));
            } else {
                parts.push(button.display.to_string());
            }
        }
    }

    if controls.can_next {
        parts.push(">".to_owned());
    }
    if controls.can_last {
        parts.push(">|".to_owned());
    }

    parts.join(" ")
}
