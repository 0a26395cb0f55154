use super::primitives::{ContainerStyle, FlexLayout, Icon, IconSize, Primitives};

/// Toolkit-independent render output.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Container { style: ContainerStyle, child: Box<Node> },
    Flex { layout: FlexLayout, children: Vec<Node> },
    Heading(String),
    Details(String),
    Text(String),
    Icon { icon: Icon, size: IconSize },
}

impl Node {
    /// Every text leaf in document order.
    pub fn text_content(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Node::Container { child, .. } => child.collect_text(out),
            Node::Flex { children, .. } => children.iter().for_each(|c| c.collect_text(out)),
            Node::Heading(text) | Node::Details(text) | Node::Text(text) => out.push(text.clone()),
            Node::Icon { .. } => {}
        }
    }

    pub fn container_style(&self) -> Option<ContainerStyle> {
        match self {
            Node::Container { style, .. } => Some(*style),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { child, .. } => std::slice::from_ref(child.as_ref()),
            Node::Flex { children, .. } => children,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl Primitives for TreeBuilder {
    type Output = Node;

    fn container(&self, style: ContainerStyle, child: Node) -> Node {
        Node::Container { style, child: Box::new(child) }
    }

    fn flex(&self, layout: FlexLayout, children: Vec<Node>) -> Node {
        Node::Flex { layout, children }
    }

    fn heading(&self, text: String) -> Node {
        Node::Heading(text)
    }

    fn details(&self, text: String) -> Node {
        Node::Details(text)
    }

    fn text(&self, text: String) -> Node {
        Node::Text(text)
    }

    fn icon(&self, icon: Icon, size: IconSize) -> Node {
        Node::Icon { icon, size }
    }
}
