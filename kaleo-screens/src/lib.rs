pub mod list;
mod render;

pub mod passes;
pub mod programs;
pub mod published;
pub mod staff;
pub mod validate;

use kaleo_api::models::{
    PassSummary, ProgramSummary, PublishedProgramSummary, StaffProgramSummary,
};
use kaleo_core::Context;
use kaleo_utils::parse::{parse_one_based_page, parse_page_size};
use tracing::warn;

pub use list::{ListScreen, NavAction};

/// Global screen metadata.
pub struct ScreenMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const SCREENS: &[ScreenMeta] = &[
    programs::META,
    passes::META,
    published::META,
    staff::META,
    validate::META,
    // Add new screens here
];

/// The list screen currently consuming navigation input.
pub enum ActiveScreen {
    Programs(ListScreen<ProgramSummary>),
    Passes(ListScreen<PassSummary>),
    Published(ListScreen<PublishedProgramSummary>),
    Staff(ListScreen<StaffProgramSummary>),
}

impl ActiveScreen {
    /// Render the screen's current state.
    pub fn view(&self) -> String {
        match self {
            ActiveScreen::Programs(screen) => screen.view(),
            ActiveScreen::Passes(screen) => screen.view(),
            ActiveScreen::Published(screen) => screen.view(),
            ActiveScreen::Staff(screen) => screen.view(),
        }
    }

    /// Apply one navigation action and render the result.
    pub async fn handle_nav(&self, action: NavAction) -> String {
        match self {
            ActiveScreen::Programs(screen) => screen.handle_nav(action).await,
            ActiveScreen::Passes(screen) => screen.handle_nav(action).await,
            ActiveScreen::Published(screen) => screen.handle_nav(action).await,
            ActiveScreen::Staff(screen) => screen.handle_nav(action).await,
        }
    }
}

/// Outcome of one top-level input line.
pub enum CommandOutcome {
    /// A screen was opened; its first render is included.
    Opened(ActiveScreen, String),
    /// A one-shot command produced output.
    Message(String),
    /// The input did not match any command.
    Unknown,
    /// The user asked to leave.
    Quit,
}

/// Route one top-level input line to its screen or command.
pub async fn handle_command(ctx: &Context, input: &str) -> CommandOutcome {
    let content = input.trim();
    if content.is_empty() {
        return CommandOutcome::Unknown;
    }

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match cmd.as_str() {
        "programs" => {
            warn_if_unauthenticated(ctx, programs::META.name);
            let screen = programs::open(ctx).await;
            let view = screen.view();
            CommandOutcome::Opened(ActiveScreen::Programs(screen), view)
        }
        "passes" => {
            warn_if_unauthenticated(ctx, passes::META.name);
            let screen = passes::open(ctx).await;
            let view = screen.view();
            CommandOutcome::Opened(ActiveScreen::Passes(screen), view)
        }
        "published" => {
            let screen = published::open(ctx, rest.map(ToOwned::to_owned)).await;
            let view = screen.view();
            CommandOutcome::Opened(ActiveScreen::Published(screen), view)
        }
        "staff" => {
            warn_if_unauthenticated(ctx, staff::META.name);
            let screen = staff::open(ctx).await;
            let view = screen.view();
            CommandOutcome::Opened(ActiveScreen::Staff(screen), view)
        }
        "validate" => {
            let Some((program_id, code)) = rest.and_then(split_two) else {
                return CommandOutcome::Message(format!("Usage: {}", validate::META.usage));
            };
            warn_if_unauthenticated(ctx, validate::META.name);
            CommandOutcome::Message(validate::run(ctx, program_id, code).await)
        }
        "help" => CommandOutcome::Message(help_text()),
        "quit" | "exit" => CommandOutcome::Quit,
        // Add new commands here
        _ => CommandOutcome::Unknown,
    }
}

/// Parse a navigation line for the active screen.
///
/// A bare number is a 1-based page jump.
pub fn parse_nav(input: &str) -> Option<NavAction> {
    let content = input.trim();
    let mut parts = content.splitn(2, char::is_whitespace);
    let head = parts.next()?.to_ascii_lowercase();
    let arg = parts.next().map(str::trim);

    match head.as_str() {
        "n" | "next" => Some(NavAction::Next),
        "p" | "prev" | "previous" => Some(NavAction::Prev),
        "f" | "first" => Some(NavAction::First),
        "l" | "last" => Some(NavAction::Last),
        "r" | "retry" => Some(NavAction::Retry),
        "b" | "back" => Some(NavAction::Back),
        "size" => parse_page_size(arg?).map(NavAction::Size),
        _ => parse_one_based_page(&head).map(NavAction::Goto),
    }
}

fn split_two(rest: &str) -> Option<(&str, &str)> {
    let mut parts = rest.splitn(2, char::is_whitespace);
    let first = parts.next().filter(|value| !value.is_empty())?;
    let second = parts.next().map(str::trim).filter(|value| !value.is_empty())?;
    Some((first, second))
}

fn warn_if_unauthenticated(ctx: &Context, screen: &str) {
    if !ctx.api.has_token() {
        warn!(screen, "no access token configured; the server will reject this request");
    }
}

fn help_text() -> String {
    let mut out = String::from("Commands:");
    for meta in SCREENS {
        out.push_str(&format!("\n  {:<28} {}", meta.usage, meta.desc));
    }
    out.push_str("\n  help                         Show this help.");
    out.push_str("\n  quit                         Leave.");
    out.push_str(
        "\nWhile a list is open: next/prev/first/last, a page number, size <n>, retry, back.",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_words_and_shorthands_parse() {
        assert_eq!(parse_nav("next"), Some(NavAction::Next));
        assert_eq!(parse_nav("n"), Some(NavAction::Next));
        assert_eq!(parse_nav(" prev "), Some(NavAction::Prev));
        assert_eq!(parse_nav("first"), Some(NavAction::First));
        assert_eq!(parse_nav("last"), Some(NavAction::Last));
        assert_eq!(parse_nav("retry"), Some(NavAction::Retry));
        assert_eq!(parse_nav("back"), Some(NavAction::Back));
    }

    #[test]
    fn bare_numbers_jump_one_based() {
        assert_eq!(parse_nav("3"), Some(NavAction::Goto(3)));
        assert_eq!(parse_nav("0"), None);
    }

    #[test]
    fn size_requires_a_valid_argument() {
        assert_eq!(parse_nav("size 20"), Some(NavAction::Size(20)));
        assert_eq!(parse_nav("size 0"), None);
        assert_eq!(parse_nav("size"), None);
    }

    #[test]
    fn unrelated_input_is_not_navigation() {
        assert_eq!(parse_nav("published choir"), None);
        assert_eq!(parse_nav(""), None);
    }
}
