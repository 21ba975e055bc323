// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A DOM-like container for the parsed tree.
//!
//! Nodes live in a single vector owned by the [`Document`]; a [`NodeId`]
//! is an index into it. Parent and sibling links are plain ids, so the
//! tree owns every node exactly once and "weak" upward links cost
//! nothing. Identity comparison, which the tree builder needs for its
//! auxiliary stacks, is integer equality.

use std::fmt;
use std::iter;
use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

use tendril::StrTendril;

use crate::tag::TagId;
use crate::{Attribute, Ns, QualName};

pub mod dump;

/// The parsed tree. A fresh `Document` contains only the synthetic
/// document node at [`Document::DOCUMENT_NODE_ID`].
pub struct Document {
    nodes: Vec<Node>,
}

/// A `Node` identifier: an index into a `Document`'s node vector.
/// Only meaningful together with the `Document` it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroU32);

/// A node and its links into the tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
}

/// The node kind and its payload.
#[derive(Clone, Debug)]
pub enum NodeData {
    /// Placeholder for unlinked slots; never reachable from the
    /// document node.
    Hole,

    /// The document node which contains all other nodes.
    Document,

    /// A document fragment root: template contents and the result of
    /// fragment parsing. `context` records the fragment context element
    /// name, when there was one.
    Fragment { context: Option<QualName> },

    /// `<!DOCTYPE …>`.
    Doctype {
        name: Option<StrTendril>,
        public_id: Option<StrTendril>,
        system_id: Option<StrTendril>,
        force_quirks: bool,
    },

    /// Character data.
    Text(StrTendril),

    /// A comment.
    Comment(StrTendril),

    /// An element.
    Elem(Element),
}

/// A markup element with name and attributes.
#[derive(Clone, Debug)]
pub struct Element {
    pub name: QualName,
    pub tag_id: TagId,
    pub attrs: Vec<Attribute>,
    /// For HTML `<template>` elements, the id of the contents fragment.
    /// Template children never appear under the element itself.
    pub template_contents: Option<NodeId>,
}

impl Element {
    pub fn new(name: QualName, attrs: Vec<Attribute>) -> Element {
        let tag_id = if name.ns == Ns::Html {
            TagId::from_name(&name.local)
        } else {
            TagId::from_name_any_case(&name.local)
        };
        Element {
            name,
            tag_id,
            attrs,
            template_contents: None,
        }
    }

    /// Value of an un-namespaced attribute.
    pub fn attr(&self, name: &str) -> Option<&StrTendril> {
        self.attrs
            .iter()
            .find(|a| a.name.ns == Ns::None && &*a.name.local == name)
            .map(|a| &a.value)
    }

    /// Is this a MathML `annotation-xml` whose `encoding` makes it an
    /// HTML integration point?
    pub fn is_annotation_xml_integration_point(&self) -> bool {
        self.name.ns == Ns::MathMl
            && self.tag_id == TagId::AnnotationXml
            && self.attr("encoding").is_some_and(|v| {
                v.eq_ignore_ascii_case("text/html")
                    || v.eq_ignore_ascii_case("application/xhtml+xml")
            })
    }
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Node {
        Node {
            data,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    pub fn prev_sibling(&self) -> Option<NodeId> {
        self.prev_sibling
    }

    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Direct text payload; empty for non-text nodes.
    pub fn text(&self) -> &str {
        match self.data {
            NodeData::Text(ref t) => t,
            _ => "",
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self.data {
            NodeData::Elem(ref e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self.data {
            NodeData::Elem(ref mut e) => Some(e),
            _ => None,
        }
    }

    pub fn is_elem(&self, ns: Ns, id: TagId) -> bool {
        match self.data {
            NodeData::Elem(ref e) => e.name.ns == ns && e.tag_id == id,
            _ => false,
        }
    }
}

impl Document {
    /// The constant `NodeId` for the document node of all `Document`s.
    pub const DOCUMENT_NODE_ID: NodeId = NodeId(NonZeroU32::MIN);

    pub fn new() -> Self {
        Document::with_capacity(8)
    }

    pub fn with_capacity(count: u32) -> Self {
        let mut nodes = Vec::with_capacity(count as usize);
        nodes.push(Node::new(NodeData::Hole)); // Index 0: padding
        nodes.push(Node::new(NodeData::Document)); // Index 1: DOCUMENT_NODE_ID
        Document { nodes }
    }

    /// Total number of node slots, including unlinked ones.
    pub fn len(&self) -> u32 {
        debug_assert!(!self.nodes.is_empty());
        (self.nodes.len() - 1) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.len() < 2
    }

    /// Create a detached node and return its id.
    pub fn create_node(&mut self, data: NodeData) -> NodeId {
        debug_assert!(!matches!(data, NodeData::Hole));
        let next_index =
            u32::try_from(self.nodes.len()).expect("Document (u32) node index overflow");
        self.nodes.push(Node::new(data));
        NodeId(NonZeroU32::new(next_index).unwrap())
    }

    /// Create a detached element. A `<template>` in the HTML namespace
    /// gets an empty contents fragment.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let mut elem = Element::new(name, attrs);
        if elem.name.ns == Ns::Html && elem.tag_id == TagId::Template {
            let contents = self.create_node(NodeData::Fragment { context: None });
            elem.template_contents = Some(contents);
        }
        self.create_node(NodeData::Elem(elem))
    }

    /// The root `<html>` element, if the document has one.
    pub fn root_element(&self) -> Option<NodeId> {
        let mut root = None;
        for child in self.children(Document::DOCUMENT_NODE_ID) {
            match self[child].data {
                NodeData::Doctype { .. } | NodeData::Comment(_) => {},
                NodeData::Elem(_) => {
                    if root.is_none() {
                        root = Some(child);
                    } else {
                        return None;
                    }
                },
                _ => return None,
            }
        }
        root
    }

    /// Unlink a node from its parent and siblings. The node and its
    /// children stay in the arena and keep their ids.
    pub fn unlink(&mut self, id: NodeId) {
        assert!(
            id != Document::DOCUMENT_NODE_ID,
            "can't unlink the document node"
        );

        let (parent, prev_sibling, next_sibling) = {
            let node = &mut self[id];
            (
                node.parent.take(),
                node.prev_sibling.take(),
                node.next_sibling.take(),
            )
        };

        if let Some(next_sibling) = next_sibling {
            self[next_sibling].prev_sibling = prev_sibling
        } else if let Some(parent) = parent {
            self[parent].last_child = prev_sibling;
        }

        if let Some(prev_sibling) = prev_sibling {
            self[prev_sibling].next_sibling = next_sibling;
        } else if let Some(parent) = parent {
            self[parent].first_child = next_sibling;
        }
    }

    /// Append a node as the new last child of `parent`.
    pub fn append(&mut self, parent: NodeId, new_child: NodeId) {
        self.unlink(new_child);
        self[new_child].parent = Some(parent);
        if let Some(last_child) = self[parent].last_child.take() {
            self[new_child].prev_sibling = Some(last_child);
            debug_assert!(self[last_child].next_sibling.is_none());
            self[last_child].next_sibling = Some(new_child);
        } else {
            debug_assert!(self[parent].first_child.is_none());
            self[parent].first_child = Some(new_child);
        }
        self[parent].last_child = Some(new_child);
    }

    /// Insert a node before the given sibling.
    pub fn insert_before(&mut self, sibling: NodeId, new_sibling: NodeId) {
        self.unlink(new_sibling);
        let parent = self[sibling]
            .parent
            .expect("insert_before sibling has no parent");
        self[new_sibling].parent = Some(parent);
        self[new_sibling].next_sibling = Some(sibling);
        if let Some(prev_sibling) = self[sibling].prev_sibling.take() {
            self[new_sibling].prev_sibling = Some(prev_sibling);
            debug_assert_eq!(self[prev_sibling].next_sibling, Some(sibling));
            self[prev_sibling].next_sibling = Some(new_sibling);
        } else {
            debug_assert_eq!(self[parent].first_child, Some(sibling));
            self[parent].first_child = Some(new_sibling);
        }
        self[sibling].prev_sibling = Some(new_sibling);
    }

    /// Replace `old` with `new` in `old`'s parent; `old` is unlinked.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) {
        self.insert_before(old, new);
        self.unlink(old);
    }

    /// Move all children of `from` to the end of `to`'s children.
    pub fn reparent_children(&mut self, from: NodeId, to: NodeId) {
        let mut next_child = self[from].first_child;
        while let Some(child) = next_child {
            debug_assert_eq!(self[child].parent, Some(from));
            next_child = self[child].next_sibling;
            self.append(to, child);
        }
    }

    /// Clone the node and (with `deep`) its whole subtree, returning a
    /// detached copy. Template contents are cloned along with their
    /// element.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> NodeId {
        let mut data = self[id].data.clone();
        if let NodeData::Elem(ref mut e) = data {
            if let Some(contents) = e.template_contents {
                let cloned = self.clone_node(contents, deep);
                e.template_contents = Some(cloned);
            }
        }
        let new_id = self.create_node(data);
        if deep {
            let children: Vec<NodeId> = self.children(id).collect();
            for child in children {
                let new_child = self.clone_node(child, true);
                self.append(new_id, new_child);
            }
        }
        new_id
    }

    /// Return all descendant character data of the given node,
    /// concatenated in tree order.
    pub fn text(&self, id: NodeId) -> Option<StrTendril> {
        match self[id].data {
            NodeData::Text(ref t) => return Some(t.clone()),
            NodeData::Comment(_) | NodeData::Doctype { .. } | NodeData::Hole => return None,
            _ => {},
        }
        let mut text = StrTendril::new();
        let mut stack = vec![];
        push_if(&mut stack, self[id].first_child);
        while let Some(id) = stack.pop() {
            let node = &self[id];
            if let NodeData::Text(ref t) = node.data {
                text.push_tendril(t);
                push_if(&mut stack, node.next_sibling);
            } else {
                push_if(&mut stack, node.next_sibling);
                push_if(&mut stack, node.first_child);
            }
        }
        Some(text)
    }

    /// Iterator over the node's direct children.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self[id].first_child, move |&id| self[id].next_sibling)
    }

    /// Iterator over the node's ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self[id].parent, move |&id| self[id].parent)
    }
}

fn push_if(stack: &mut Vec<NodeId>, id: Option<NodeId>) {
    if let Some(id) = id {
        stack.push(id);
    }
}

impl Index<NodeId> for Document {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0.get() as usize]
    }
}

impl IndexMut<NodeId> for Document {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0.get() as usize]
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn text_node(doc: &mut Document, s: &str) -> NodeId {
        doc.create_node(NodeData::Text(s.into()))
    }

    #[test]
    fn build_and_walk() {
        let mut doc = Document::new();
        let root = doc.create_element(QualName::html("html"), vec![]);
        doc.append(Document::DOCUMENT_NODE_ID, root);
        let body = doc.create_element(QualName::html("body"), vec![]);
        doc.append(root, body);
        let hello = text_node(&mut doc, "hello");
        doc.append(body, hello);

        assert_eq!(doc.root_element(), Some(root));
        assert_eq!(doc[hello].parent(), Some(body));
        assert_eq!(doc.children(root).collect::<Vec<_>>(), vec![body]);
        assert_eq!(&*doc.text(root).unwrap(), "hello");
        assert!(doc[body].has_children());
    }

    #[test]
    fn unlink_and_insert_before() {
        let mut doc = Document::new();
        let root = doc.create_element(QualName::html("div"), vec![]);
        doc.append(Document::DOCUMENT_NODE_ID, root);
        let a = text_node(&mut doc, "a");
        let b = text_node(&mut doc, "b");
        let c = text_node(&mut doc, "c");
        doc.append(root, a);
        doc.append(root, c);
        doc.insert_before(c, b);

        let kids: Vec<_> = doc.children(root).collect();
        assert_eq!(kids, vec![a, b, c]);

        doc.unlink(b);
        let kids: Vec<_> = doc.children(root).collect();
        assert_eq!(kids, vec![a, c]);
        assert_eq!(doc[b].parent(), None);

        doc.replace_child(a, b);
        let kids: Vec<_> = doc.children(root).collect();
        assert_eq!(kids, vec![b, c]);
    }

    #[test]
    fn deep_clone_is_detached() {
        let mut doc = Document::new();
        let div = doc.create_element(
            QualName::html("div"),
            vec![Attribute {
                name: QualName::new(Ns::None, "id".into()),
                value: "x".into(),
            }],
        );
        doc.append(Document::DOCUMENT_NODE_ID, div);
        let t = text_node(&mut doc, "payload");
        doc.append(div, t);

        let copy = doc.clone_node(div, true);
        assert_ne!(copy, div);
        assert_eq!(doc[copy].parent(), None);
        assert_eq!(&*doc.text(copy).unwrap(), "payload");
        let elem = doc[copy].as_element().unwrap();
        assert_eq!(elem.attr("id").map(|v| &**v), Some("x"));
    }

    #[test]
    fn template_gets_contents_fragment() {
        let mut doc = Document::new();
        let tmpl = doc.create_element(QualName::html("template"), vec![]);
        let contents = doc[tmpl].as_element().unwrap().template_contents;
        assert!(contents.is_some());
        assert!(matches!(
            doc[contents.unwrap()].data,
            NodeData::Fragment { .. }
        ));
    }

    #[test]
    fn annotation_xml_integration_point() {
        let elem = Element::new(
            QualName::new(Ns::MathMl, "annotation-xml".into()),
            vec![Attribute {
                name: QualName::new(Ns::None, "encoding".into()),
                value: "text/HTML".into(),
            }],
        );
        assert!(elem.is_annotation_xml_integration_point());

        let plain = Element::new(QualName::new(Ns::MathMl, "annotation-xml".into()), vec![]);
        assert!(!plain.is_annotation_xml_integration_point());
    }
}
