//! Visitor: add operations over a node hierarchy without touching the nodes.
//!
//! Double dispatch: `node.accept(visitor)` picks the node kind, and the
//! node calls back the one `visit_*` method meant for it. No visitor ever
//! inspects a node's type, and no node knows what a visitor does.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub trait Visitor {
    fn visit_city(&mut self, city: &City);
    fn visit_industry(&mut self, industry: &Industry);
}

pub trait Visitable {
    fn accept(&self, visitor: &mut dyn Visitor);
}

// ── Nodes ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct City;

impl City {
    pub fn describe(&self) -> String {
        "Description of a city.".to_string()
    }
}

impl Visitable for City {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_city(self);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Industry;

impl Industry {
    pub fn describe(&self) -> String {
        "Description of an industry.".to_string()
    }
}

impl Visitable for Industry {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_industry(self);
    }
}

/// The closed set of node kinds, for holding mixed sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    City(City),
    Industry(Industry),
}

impl Visitable for Node {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Self::City(city) => city.accept(visitor),
            Self::Industry(industry) => industry.accept(visitor),
        }
    }
}

impl From<City> for Node {
    fn from(city: City) -> Self {
        Self::City(city)
    }
}

impl From<Industry> for Node {
    fn from(industry: Industry) -> Self {
        Self::Industry(industry)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    City,
    Industry,
}

impl NodeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Industry => "Industry",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── XML export ───────────────────────────────────────────────────────────────

/// One exported record per visited node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlExport {
    pub kind: NodeKind,
    pub description: String,
}

impl XmlExport {
    pub fn to_xml(&self) -> String {
        format!("<{0}>{1}</{0}>", self.kind, self.description)
    }
}

#[derive(Debug, Default)]
pub struct ExportXmlVisitor {
    exports: Vec<XmlExport>,
}

impl ExportXmlVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in visiting order.
    pub fn exports(&self) -> &[XmlExport] {
        &self.exports
    }

    pub fn into_exports(self) -> Vec<XmlExport> {
        self.exports
    }
}

impl Visitor for ExportXmlVisitor {
    fn visit_city(&mut self, city: &City) {
        self.exports.push(XmlExport {
            kind: NodeKind::City,
            description: city.describe(),
        });
    }

    fn visit_industry(&mut self, industry: &Industry) {
        self.exports.push(XmlExport {
            kind: NodeKind::Industry,
            description: industry.describe(),
        });
    }
}

// ── Counting ─────────────────────────────────────────────────────────────────

/// A second operation over the same nodes.
#[derive(Debug, Default)]
pub struct NodeCounter {
    counts: BTreeMap<NodeKind, usize>,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

impl Visitor for NodeCounter {
    fn visit_city(&mut self, _city: &City) {
        *self.counts.entry(NodeKind::City).or_insert(0) += 1;
    }

    fn visit_industry(&mut self, _industry: &Industry) {
        *self.counts.entry(NodeKind::Industry).or_insert(0) += 1;
    }
}

/// Visit every node in order.
pub fn visit_all<'a, I>(nodes: I, visitor: &mut dyn Visitor)
where
    I: IntoIterator<Item = &'a Node>,
{
    for node in nodes {
        node.accept(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_keeps_input_order() {
        let nodes = [Node::from(City), Node::from(Industry)];
        let mut visitor = ExportXmlVisitor::new();

        visit_all(&nodes, &mut visitor);

        let exports = visitor.exports();
        assert_eq!(exports.len(), 2);
        assert_eq!(exports[0].kind, NodeKind::City);
        assert_eq!(exports[0].description, "Description of a city.");
        assert_eq!(exports[1].kind, NodeKind::Industry);
        assert_eq!(exports[1].description, "Description of an industry.");
    }

    #[test]
    fn each_node_hits_its_own_method() {
        let nodes = [
            Node::from(Industry),
            Node::from(City),
            Node::from(Industry),
        ];
        let mut counter = NodeCounter::new();
        visit_all(&nodes, &mut counter);

        assert_eq!(counter.count(NodeKind::City), 1);
        assert_eq!(counter.count(NodeKind::Industry), 2);
    }

    #[test]
    fn concrete_nodes_accept_directly() {
        let mut visitor = ExportXmlVisitor::new();
        Industry.accept(&mut visitor);
        City.accept(&mut visitor);

        let kinds: Vec<NodeKind> = visitor.into_exports().into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Industry, NodeKind::City]);
    }

    #[test]
    fn xml_rendering() {
        let export = XmlExport {
            kind: NodeKind::City,
            description: City.describe(),
        };
        assert_eq!(export.to_xml(), "<City>Description of a city.</City>");
    }

    #[test]
    fn empty_sequence_exports_nothing() {
        let nodes: [Node; 0] = [];
        let mut visitor = ExportXmlVisitor::new();
        visit_all(&nodes, &mut visitor);
        assert!(visitor.exports().is_empty());
    }
}
