//! Tree queries over built element trees.
//!
//! Used by hit-testing and by tests that assert on rendered structure.

use crate::element::{Content, Element};

impl Element {
    /// Find the first element with the given id (depth-first).
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.child_slice().iter().find_map(|child| child.find(id))
    }

    /// Collect all elements matching a predicate (depth-first order).
    pub fn collect<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_into(predicate, &mut out);
        out
    }

    fn collect_into<'a>(
        &'a self,
        predicate: &dyn Fn(&Element) -> bool,
        out: &mut Vec<&'a Element>,
    ) {
        if predicate(self) {
            out.push(self);
        }
        for child in self.child_slice() {
            child.collect_into(predicate, out);
        }
    }

    /// Concatenated text content of this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.text_content_into(&mut out);
        out
    }

    fn text_content_into(&self, out: &mut String) {
        match &self.content {
            Content::Text(text) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
            Content::Children(children) => {
                for child in children {
                    child.text_content_into(out);
                }
            }
            Content::None => {}
        }
    }
}
