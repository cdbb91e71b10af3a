//! Public published-program list screen with full-text search.

use std::sync::Arc;

use kaleo_api::models::PublishedProgramSummary;
use kaleo_core::Context;
use kaleo_utils::pagination::{PageFuture, PageQuery, WindowedStrategy};

use crate::ScreenMeta;
use crate::list::ListScreen;

pub const META: ScreenMeta = ScreenMeta {
    name: "published",
    desc: "Browse published programs, optionally searching by text.",
    usage: "published [query]",
};

const ITEMS_PER_PAGE: usize = 6;

/// Open the published-programs screen, optionally pre-filtered.
///
/// A search term always starts from the first page; the same rule applies
/// when the term changes later.
pub async fn open(ctx: &Context, search: Option<String>) -> ListScreen<PublishedProgramSummary> {
    let api = Arc::clone(&ctx.api);

    ListScreen::open(
        "Published programs",
        ITEMS_PER_PAGE,
        search,
        Box::new(WindowedStrategy),
        render_row,
        move |query: PageQuery| -> PageFuture<PublishedProgramSummary> {
            let api = Arc::clone(&api);
            Box::pin(async move { api.list_published_programs(&query).await.map_err(Into::into) })
        },
    )
    .await
}

fn render_row(program: &PublishedProgramSummary) -> String {
    let when = program.start_time.as_deref().unwrap_or("TBD");
    format!("{} at {} ({})", program.name, program.venue, when)
}
