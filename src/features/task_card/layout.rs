use crate::core::models::{CardDisplayState, TaskSummary};
use super::primitives::{Align, ContainerStyle, FlexLayout, Icon, IconSize, Justify, Primitives};

pub const CARD_ELEVATION: u8 = 0;

/// Lays out one task card with whatever primitives the caller supplies.
pub fn compose_card<P: Primitives>(p: &P, summary: &TaskSummary, state: CardDisplayState) -> P::Output {
    let title = p.flex(
        FlexLayout::row().gap(0.5).align(Align::Center),
        vec![
            p.icon(Icon::Comment, IconSize::Small),
            p.heading(summary.title.clone()),
        ],
    );

    let header = p.flex(
        FlexLayout::row().justify(Justify::SpaceBetween).align(Align::Center),
        vec![title, p.text(summary.due_label())],
    );

    let body = p.details(summary.description.clone());

    p.container(
        ContainerStyle { elevation: CARD_ELEVATION, active: state.active },
        p.flex(FlexLayout::column().gap(1.0), vec![header, body]),
    )
}
