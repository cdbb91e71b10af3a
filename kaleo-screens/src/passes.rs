//! Attendee-facing purchased pass list screen.

use std::sync::Arc;

use kaleo_api::models::PassSummary;
use kaleo_core::Context;
use kaleo_utils::pagination::{PageFuture, PageQuery, WindowedStrategy};

use crate::ScreenMeta;
use crate::list::ListScreen;

pub const META: ScreenMeta = ScreenMeta {
    name: "passes",
    desc: "Browse your purchased passes.",
    usage: "passes",
};

const ITEMS_PER_PAGE: usize = 10;

/// Open the passes screen on its first page.
pub async fn open(ctx: &Context) -> ListScreen<PassSummary> {
    let api = Arc::clone(&ctx.api);

    ListScreen::open(
        "Your passes",
        ITEMS_PER_PAGE,
        None,
        Box::new(WindowedStrategy),
        render_row,
        move |query: PageQuery| -> PageFuture<PassSummary> {
            let api = Arc::clone(&api);
            Box::pin(async move { api.list_passes(&query).await.map_err(Into::into) })
        },
    )
    .await
}

fn render_row(pass: &PassSummary) -> String {
    format!(
        "{} [{:?}] {} ({}) code {}",
        pass.program_name, pass.status, pass.pass_type_name, pass.pass_type_price, pass.manual_code,
    )
}
