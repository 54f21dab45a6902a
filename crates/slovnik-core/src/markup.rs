use scraper::{ElementRef, Html, Selector};

/// A result page, parsed once per lookup and discarded after extraction.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// Nodes matching a CSS selector, in document order. An invalid
    /// selector or zero matches yields an empty vector, never an error;
    /// callers treat it as "no data for this layout".
    pub fn select(&self, path: &str) -> Vec<Node<'_>> {
        let Ok(selector) = Selector::parse(path) else {
            return Vec::new();
        };

        self.html.select(&selector).map(Node).collect()
    }
}

/// An element of the parsed tree. Read-only.
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

/// A direct child of a node: a nested element or a bare text fragment.
pub enum Child<'a> {
    Element(Node<'a>),
    Text(&'a str),
}

impl<'a> Node<'a> {
    /// Descendant nodes matching a CSS selector, in document order.
    pub fn select(&self, path: &str) -> Vec<Node<'a>> {
        let Ok(selector) = Selector::parse(path) else {
            return Vec::new();
        };

        self.0.select(&selector).map(Node).collect()
    }

    /// Rendered text of the node and all its descendants.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn tag(&self) -> &'a str {
        self.0.value().name()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|attr| attr.split_whitespace().any(|c| c == class))
    }

    /// Direct element and text children in document order. Comment and
    /// other non-content nodes are skipped.
    pub fn children(&self) -> Vec<Child<'a>> {
        self.0
            .children()
            .filter_map(|child| match ElementRef::wrap(child) {
                Some(element) => Some(Child::Element(Node(element))),
                None => child.value().as_text().map(|text| Child::Text(&**text)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="results">
            <h1>title</h1>
            <table><tr><td>first</td><td class="mean bold">second</td></tr></table>
        </div>
    "#;

    #[test]
    fn test_select_returns_matches_in_document_order() {
        let doc = Document::parse(PAGE);
        let cells = doc.select("#results td");

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text(), "first");
        assert_eq!(cells[1].text(), "second");
    }

    #[test]
    fn test_select_without_matches_is_empty_not_an_error() {
        let doc = Document::parse(PAGE);
        assert!(doc.select("#missing .nothing").is_empty());
    }

    #[test]
    fn test_invalid_selector_yields_no_nodes() {
        let doc = Document::parse(PAGE);
        assert!(doc.select("td[[[").is_empty());
    }

    #[test]
    fn test_nested_select_and_attributes() {
        let doc = Document::parse(PAGE);
        let row = doc.select("tr");
        let cells = row[0].select("td");

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].attr("class"), Some("mean bold"));
        assert!(cells[1].has_class("mean"));
        assert!(!cells[1].has_class("me"));
        assert_eq!(cells[0].tag(), "td");
    }

    #[test]
    fn test_children_preserve_document_order() {
        let doc = Document::parse("<p>one<b>two</b>three</p>");
        let children = doc.select("p")[0].children();

        assert_eq!(children.len(), 3);
        match &children[1] {
            Child::Element(node) => assert_eq!(node.tag(), "b"),
            Child::Text(_) => panic!("expected an element"),
        }
        match &children[2] {
            Child::Text(text) => assert_eq!(*text, "three"),
            Child::Element(_) => panic!("expected text"),
        }
    }
}
