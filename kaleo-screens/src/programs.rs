//! Organizer-facing program list screen.

use std::sync::Arc;

use kaleo_api::models::ProgramSummary;
use kaleo_core::Context;
use kaleo_utils::pagination::{PageFuture, PageQuery, WindowedStrategy};

use crate::ScreenMeta;
use crate::list::ListScreen;

pub const META: ScreenMeta = ScreenMeta {
    name: "programs",
    desc: "Browse the programs you organize.",
    usage: "programs",
};

const ITEMS_PER_PAGE: usize = 4;

/// Open the programs screen on its first page.
pub async fn open(ctx: &Context) -> ListScreen<ProgramSummary> {
    let api = Arc::clone(&ctx.api);

    ListScreen::open(
        "Your programs",
        ITEMS_PER_PAGE,
        None,
        Box::new(WindowedStrategy),
        render_row,
        move |query: PageQuery| -> PageFuture<ProgramSummary> {
            let api = Arc::clone(&api);
            Box::pin(async move { api.list_programs(&query).await.map_err(Into::into) })
        },
    )
    .await
}

fn render_row(program: &ProgramSummary) -> String {
    format!(
        "{} [{:?}] at {} ({} pass types)",
        program.name,
        program.status,
        program.venue,
        program.pass_types.len(),
    )
}
