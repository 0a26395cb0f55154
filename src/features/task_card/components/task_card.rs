use leptos::logging::warn;
use leptos::prelude::*;
use crate::core::CardTheme;
use crate::core::models::{CardDisplayState, TaskSummary};
use crate::features::task_card::html::HtmlPrimitives;
use crate::features::task_card::layout::compose_card;

/// Visual summary of a single task. Without a `summary` it shows the
/// placeholder task; the theme comes from context when one is provided and valid.
#[component]
pub fn TaskCard(
    #[prop(optional)] summary: Option<TaskSummary>,
    #[prop(optional)] active: bool,
) -> impl IntoView {
    let summary = summary.unwrap_or_else(TaskSummary::placeholder);
    let theme = use_context::<CardTheme>()
        .filter(|theme| match theme.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Ignoring card theme: {}", e);
                false
            }
        })
        .unwrap_or_default();

    compose_card(&HtmlPrimitives::new(theme), &summary, CardDisplayState::new(active))
}
