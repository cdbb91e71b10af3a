//! Generic paginated list screen.
//!
//! Every list in the app is the same machine: one fetch controller, one
//! control strategy, one row formatter. The per-resource modules only
//! supply those three pieces.

use kaleo_utils::pagination::{
    FetchState, PageFetchController, PageFuture, PageQuery, PageStrategy, clamp_page,
};

use crate::render::render_state;

/// One navigation action against an open list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Go to the next page.
    Next,
    /// Go to the previous page.
    Prev,
    /// Jump to the first page.
    First,
    /// Jump to the last page.
    Last,
    /// Jump to a page, 1-based as the user typed it.
    Goto(usize),
    /// Change the page size (resets to the first page).
    Size(usize),
    /// Re-issue the last query.
    Retry,
    /// Close the screen. Handled by the host loop, not the screen.
    Back,
}

/// A paginated list screen: a controller plus a presentation policy.
pub struct ListScreen<T> {
    title: &'static str,
    controller: PageFetchController<T>,
    strategy: Box<dyn PageStrategy + Send + Sync>,
    render_row: fn(&T) -> String,
}

impl<T: Clone> ListScreen<T> {
    /// Open a screen and load its first page.
    pub async fn open<F>(
        title: &'static str,
        page_size: usize,
        search: Option<String>,
        strategy: Box<dyn PageStrategy + Send + Sync>,
        render_row: fn(&T) -> String,
        fetcher: F,
    ) -> Self
    where
        F: Fn(PageQuery) -> PageFuture<T> + Send + Sync + 'static,
    {
        let screen = Self {
            title,
            controller: PageFetchController::new(fetcher),
            strategy,
            render_row,
        };

        screen
            .controller
            .submit(PageQuery::new(page_size).with_search(search))
            .await;

        screen
    }

    /// Apply one navigation action, then render the resulting state.
    ///
    /// Directions that are unavailable in the current envelope are
    /// ignored rather than issued; jump targets are clamped to the latest
    /// known page count.
    pub async fn handle_nav(&self, action: NavAction) -> String {
        match (&action, self.controller.state()) {
            (NavAction::Retry, _) => self.controller.retry().await,
            (NavAction::Size(size), _) => self.controller.set_page_size(*size).await,
            (_, FetchState::Loaded(page)) => {
                let info = page.info();
                let controls = self.strategy.compute_controls(info);

                match action {
                    NavAction::Next if controls.can_next => {
                        self.controller.set_page(info.page_index + 1).await;
                    }
                    NavAction::Prev if controls.can_prev => {
                        self.controller.set_page(info.page_index - 1).await;
                    }
                    NavAction::First if controls.can_first => {
                        self.controller.set_page(0).await;
                    }
                    NavAction::Last if controls.can_last => {
                        self.controller.set_page(info.total_pages - 1).await;
                    }
                    NavAction::Goto(display_page) => {
                        let target = clamp_page(display_page.saturating_sub(1), info.total_pages);
                        self.controller.set_page(target).await;
                    }
                    _ => {}
                }
            }
            // Without a loaded envelope there is nothing to navigate.
            _ => {}
        }

        self.view()
    }

    /// Render the current fetch state.
    pub fn view(&self) -> String {
        render_state(
            self.title,
            &self.controller.state(),
            self.strategy.as_ref(),
            self.render_row,
        )
    }
}
