// Capability set a card layout is written against. Any toolkit that can
// build these six pieces can render a card.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    pub fn as_css(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    SpaceBetween,
}

impl Justify {
    pub fn as_css(&self) -> &'static str {
        match self {
            Justify::Start => "flex-start",
            Justify::SpaceBetween => "space-between",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    Stretch,
}

impl Align {
    pub fn as_css(&self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::Stretch => "stretch",
        }
    }
}

/// Flex layout configuration. `gap` is in theme spacing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexLayout {
    pub direction: Direction,
    pub gap: f32,
    pub justify: Justify,
    pub align: Align,
}

impl FlexLayout {
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            gap: 0.0,
            justify: Justify::Start,
            align: Align::Stretch,
        }
    }

    pub fn column() -> Self {
        Self {
            direction: Direction::Column,
            ..Self::row()
        }
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerStyle {
    pub elevation: u8,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Comment,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Comment => "comment",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Comment => "💬",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Small,
}

impl IconSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSize::Small => "small",
        }
    }
}

pub trait Primitives {
    type Output;

    fn container(&self, style: ContainerStyle, child: Self::Output) -> Self::Output;
    fn flex(&self, layout: FlexLayout, children: Vec<Self::Output>) -> Self::Output;
    fn heading(&self, text: String) -> Self::Output;
    fn details(&self, text: String) -> Self::Output;
    fn text(&self, text: String) -> Self::Output;
    fn icon(&self, icon: Icon, size: IconSize) -> Self::Output;
}
