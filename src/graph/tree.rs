use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use petgraph::graph::NodeIndex;

use super::types::{DependencyGraph, VisitState};
use crate::constants::tree::{
    BRANCH, CIRCULAR_SUFFIX, LAST_BRANCH, ROOT_MARKER, SPACE, VERTICAL,
};
use crate::error::DepLensError;

/// One rendered row of the dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'g> {
    /// Distance from the root along the path this row was reached by
    pub depth: usize,
    pub package: &'g str,
    /// The package is already open on the current path, so the row is a leaf
    pub circular: bool,
    /// Indentation and connector glyphs preceding the package name
    pub prefix: String,
}

impl fmt::Display for TreeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth == 0 {
            return write!(f, "{ROOT_MARKER}{}", self.package);
        }

        write!(f, "{}{}", self.prefix, self.package)?;
        if self.circular {
            write!(f, "{CIRCULAR_SUFFIX}")?;
        }
        Ok(())
    }
}

struct TreeFrame {
    node: NodeIndex,
    children: Vec<NodeIndex>,
    cursor: usize,
    /// Indentation inherited by this node's children
    indent: String,
}

/// Lazily walks the graph depth-first and yields one [`TreeLine`] per row
///
/// Only packages open on the current path stop descent. A package reached
/// again through another parent is expanded in full under that parent too.
pub struct TreeLines<'g> {
    graph: &'g DependencyGraph,
    states: HashMap<NodeIndex, VisitState>,
    stack: Vec<TreeFrame>,
    pending_root: Option<NodeIndex>,
}

impl<'g> TreeLines<'g> {
    fn new(graph: &'g DependencyGraph, root: NodeIndex) -> Self {
        Self {
            graph,
            states: HashMap::new(),
            stack: Vec::new(),
            pending_root: Some(root),
        }
    }

    fn open(&mut self, node: NodeIndex, indent: String) {
        self.states.insert(node, VisitState::InProgress);
        self.stack.push(TreeFrame {
            node,
            children: self.graph.ordered_successors(node),
            cursor: 0,
            indent,
        });
    }
}

impl<'g> Iterator for TreeLines<'g> {
    type Item = TreeLine<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending_root.take() {
            self.open(root, String::new());
            return Some(TreeLine {
                depth: 0,
                package: self.graph.name(root),
                circular: false,
                prefix: String::new(),
            });
        }

        loop {
            let depth = self.stack.len();
            let frame = self.stack.last_mut()?;

            let Some(&child) = frame.children.get(frame.cursor) else {
                let node = frame.node;
                self.states.insert(node, VisitState::Done);
                self.stack.pop();
                continue;
            };

            frame.cursor += 1;
            let is_last = frame.cursor == frame.children.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let prefix = format!("{}{}", frame.indent, connector);
            let child_indent = format!("{}{}", frame.indent, if is_last { SPACE } else { VERTICAL });

            let package = self.graph.name(child);
            let circular = self.states.get(&child) == Some(&VisitState::InProgress);

            if !circular {
                self.open(child, child_indent);
            }

            return Some(TreeLine {
                depth,
                package,
                circular,
                prefix,
            });
        }
    }
}

/// Indented tree view of a dependency graph
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Rows of the tree rooted at `root`, produced on demand
    pub fn lines<'g>(
        &self,
        graph: &'g DependencyGraph,
        root: &str,
    ) -> Result<TreeLines<'g>, DepLensError> {
        let root_idx = graph.index_or_unknown(root)?;
        Ok(TreeLines::new(graph, root_idx))
    }

    pub fn render(
        &self,
        graph: &DependencyGraph,
        root: &str,
        output: &mut dyn Write,
    ) -> Result<(), DepLensError> {
        for line in self.lines(graph, root)? {
            writeln!(output, "{line}")?;
        }
        Ok(())
    }

    pub fn render_to_string(&self, graph: &DependencyGraph, root: &str) -> Result<String, DepLensError> {
        let mut rendered = String::new();
        for line in self.lines(graph, root)? {
            rendered.push_str(&line.to_string());
            rendered.push('\n');
        }
        Ok(rendered)
    }
}
