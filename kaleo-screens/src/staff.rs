//! Staff validation program list screen.

use std::sync::Arc;

use kaleo_api::models::StaffProgramSummary;
use kaleo_core::Context;
use kaleo_utils::pagination::{PageFuture, PageQuery, SimpleStrategy};

use crate::ScreenMeta;
use crate::list::ListScreen;

pub const META: ScreenMeta = ScreenMeta {
    name: "staff",
    desc: "Browse programs you can validate passes for.",
    usage: "staff",
};

const ITEMS_PER_PAGE: usize = 20;

/// Open the staff programs screen on its first page.
pub async fn open(ctx: &Context) -> ListScreen<StaffProgramSummary> {
    let api = Arc::clone(&ctx.api);

    ListScreen::open(
        "Programs you validate",
        ITEMS_PER_PAGE,
        None,
        Box::new(SimpleStrategy),
        render_row,
        move |query: PageQuery| -> PageFuture<StaffProgramSummary> {
            let api = Arc::clone(&api);
            Box::pin(async move { api.list_staff_programs(&query).await.map_err(Into::into) })
        },
    )
    .await
}

fn render_row(program: &StaffProgramSummary) -> String {
    format!("{} ({})", program.name, program.id)
}
