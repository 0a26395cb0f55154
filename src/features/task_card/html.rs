use leptos::prelude::*;
use crate::core::CardTheme;
use super::primitives::{ContainerStyle, FlexLayout, Icon, IconSize, Primitives};

/// Renders primitives as DOM, styled from a theme.
#[derive(Debug, Clone, Default)]
pub struct HtmlPrimitives {
    pub theme: CardTheme,
}

impl HtmlPrimitives {
    pub fn new(theme: CardTheme) -> Self {
        Self { theme }
    }

    pub fn flex_css(&self, layout: &FlexLayout) -> String {
        format!(
            "display: flex; flex-direction: {}; gap: {}; justify-content: {}; align-items: {}",
            layout.direction.as_css(),
            self.theme.spacing(layout.gap),
            layout.justify.as_css(),
            layout.align.as_css(),
        )
    }
}

impl Primitives for HtmlPrimitives {
    type Output = AnyView;

    fn container(&self, style: ContainerStyle, child: AnyView) -> AnyView {
        let css = self.theme.container_css(style.elevation, style.active);
        view! {
            <div
                class="task-card"
                class:task-card--active=style.active
                data-active=style.active.to_string()
                data-elevation=style.elevation.to_string()
                style=css
            >
                {child}
            </div>
        }
        .into_any()
    }

    fn flex(&self, layout: FlexLayout, children: Vec<AnyView>) -> AnyView {
        view! { <div class="flex" style=self.flex_css(&layout)>{children}</div> }.into_any()
    }

    fn heading(&self, text: String) -> AnyView {
        view! { <h3 class="task-card-title">{text}</h3> }.into_any()
    }

    fn details(&self, text: String) -> AnyView {
        view! { <p class="task-card-details">{text}</p> }.into_any()
    }

    fn text(&self, text: String) -> AnyView {
        view! { <div>{text}</div> }.into_any()
    }

    fn icon(&self, icon: Icon, size: IconSize) -> AnyView {
        let class = format!("icon icon-{} icon-{}", icon.name(), size.as_str());
        view! { <span class=class aria-hidden="true">{icon.glyph()}</span> }.into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::task_card::primitives::{Align, Justify};

    #[test]
    fn flex_css_uses_theme_spacing() {
        let html = HtmlPrimitives::default();
        let layout = FlexLayout::row().gap(0.5).justify(Justify::SpaceBetween).align(Align::Center);
        assert_eq!(
            html.flex_css(&layout),
            "display: flex; flex-direction: row; gap: 4px; justify-content: space-between; align-items: center"
        );

        let wide = HtmlPrimitives::new(CardTheme { spacing_px: 10.0, ..CardTheme::default() });
        assert!(wide.flex_css(&FlexLayout::column().gap(1.0)).contains("gap: 10px"));
    }
}
