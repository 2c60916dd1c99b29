//! Reading and writing open digraphs in DOT (Graphviz) format.
//!
//! The writer emits one statement per line:
//!
//! ```text
//! digraph G {
//!     v0 [label="x", input=0];
//!     v1 [label="&"];
//!     v2 [label="y", output=0];
//!     v0 -> v1 [label="1"];
//!     v1 -> v2 [label="1"];
//! }
//! ```
//!
//! Each edge line carries its multiplicity as the edge label. Boundary nodes carry their
//! position in the input and output lists as `input`/`output` attributes, repeated when an id
//! occurs more than once, so [`OpenDigraph::from_dot`] restores the boundary lists exactly. The reader accepts exactly this
//! line-oriented subset of DOT, plus blank lines and `//` comments.
use crate::error::GraphError;
use crate::node::{Node, NodeId};
use crate::open_digraph::OpenDigraph;

use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// [`Display`](fmt::Display) adapter rendering a graph as DOT. See [`OpenDigraph::dot`].
pub struct Dot<'a> {
    graph: &'a OpenDigraph,
    verbose: bool,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions = |ids: &[NodeId]| -> BTreeMap<NodeId, Vec<usize>> {
            let mut at: BTreeMap<NodeId, Vec<usize>> = BTreeMap::new();
            for (i, &id) in ids.iter().enumerate() {
                at.entry(id).or_default().push(i);
            }
            at
        };
        let inputs = positions(self.graph.inputs());
        let outputs = positions(self.graph.outputs());

        writeln!(f, "digraph G {{")?;
        for (id, node) in self.graph.nodes() {
            write!(f, "    v{} [label={}", id.0, Quoted(node.label()))?;
            if self.verbose {
                let xlabel = format!("{} (id: {})", node.label(), id.0);
                write!(f, ", xlabel={}", Quoted(&xlabel))?;
            }
            for i in inputs.get(id).into_iter().flatten() {
                write!(f, ", input={}", i)?;
            }
            for o in outputs.get(id).into_iter().flatten() {
                write!(f, ", output={}", o)?;
            }
            writeln!(f, "];")?;
        }
        for (id, node) in self.graph.nodes() {
            for (child, m) in node.children() {
                writeln!(f, "    v{} -> v{} [label=\"{}\"];", id.0, child.0, m)?;
            }
        }
        writeln!(f, "}}")
    }
}

struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                c => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")
    }
}

impl OpenDigraph {
    /// Lazily render the graph as DOT.
    ///
    /// With `verbose`, every node also gets an `xlabel` of the form `"<label> (id: <id>)"`.
    pub fn dot(&self, verbose: bool) -> Dot<'_> {
        Dot { graph: self, verbose }
    }

    pub fn to_dot(&self, verbose: bool) -> String {
        self.dot(verbose).to_string()
    }

    pub fn save_as_dot_file(&self, path: impl AsRef<Path>, verbose: bool) -> Result<(), GraphError> {
        let path = path.as_ref();
        debug!("writing {} nodes to {}", self.len(), path.display());
        fs::write(path, self.to_dot(verbose))?;
        Ok(())
    }

    pub fn from_dot_file(path: impl AsRef<Path>) -> Result<OpenDigraph, GraphError> {
        let text = fs::read_to_string(path)?;
        Self::from_dot(&text)
    }

    /// Parse a graph written by [`OpenDigraph::to_dot`].
    ///
    /// Both halves of every edge are written together, so parent and child maps always agree.
    /// Edge statements without a `label` count as multiplicity 1, and repeated statements for
    /// the same pair add up. Node statements without a label get the empty label.
    pub fn from_dot(text: &str) -> Result<OpenDigraph, GraphError> {
        let mut nodes: BTreeMap<NodeId, Node> = BTreeMap::new();
        let mut inputs: Vec<(usize, NodeId)> = Vec::new();
        let mut outputs: Vec<(usize, NodeId)> = Vec::new();
        let mut edges: BTreeMap<(NodeId, NodeId), (usize, usize)> = BTreeMap::new();
        let mut opened = false;
        let mut closed = false;

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let err = |message: String| GraphError::Parse { line, message };

            let stmt = raw.trim();
            if stmt.is_empty() || stmt.starts_with("//") {
                continue;
            }
            if closed {
                return Err(err("statement after closing brace".to_string()));
            }
            if !opened {
                if !(stmt.starts_with("digraph") && stmt.ends_with('{')) {
                    return Err(err(format!("expected `digraph <name> {{`, found {:?}", stmt)));
                }
                opened = true;
                continue;
            }
            if stmt == "}" {
                closed = true;
                continue;
            }

            let stmt = stmt.strip_suffix(';').unwrap_or(stmt).trim_end();
            let (head, attrs) = match stmt.find('[') {
                Some(open) => {
                    let body = stmt[open + 1..]
                        .strip_suffix(']')
                        .ok_or_else(|| err("unterminated attribute list".to_string()))?;
                    (stmt[..open].trim(), parse_attrs(body).map_err(err)?)
                }
                None => (stmt, Vec::new()),
            };
            let attr = |key: &str| attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

            if let Some((src, tgt)) = head.split_once("->") {
                let src = parse_id(src.trim()).map_err(err)?;
                let tgt = parse_id(tgt.trim()).map_err(err)?;
                let m = match attr("label") {
                    Some(v) => v
                        .parse::<usize>()
                        .map_err(|_| err(format!("bad multiplicity {:?}", v)))?,
                    None => 1,
                };
                let (_, total) = edges.entry((src, tgt)).or_insert((line, 0));
                *total = total
                    .checked_add(m)
                    .ok_or_else(|| err(format!("multiplicity of v{} -> v{} overflows", src.0, tgt.0)))?;
            } else {
                let id = parse_id(head).map_err(err)?;
                if nodes.contains_key(&id) {
                    return Err(err(format!("node v{} declared twice", id.0)));
                }
                nodes.insert(id, Node::isolated(id, attr("label").unwrap_or("")));
                for (key, boundary) in [("input", &mut inputs), ("output", &mut outputs)] {
                    for (_, v) in attrs.iter().filter(|(k, _)| k == key) {
                        let pos = v
                            .parse::<usize>()
                            .map_err(|_| err(format!("bad {} position {:?}", key, v)))?;
                        boundary.push((pos, id));
                    }
                }
            }
        }

        if !closed {
            return Err(GraphError::Parse {
                line: text.lines().count(),
                message: "missing closing brace".to_string(),
            });
        }

        let mut graph = OpenDigraph::new(vec![], vec![], nodes.into_values());
        for ((src, tgt), (line, m)) in edges {
            if let Some(missing) = [src, tgt].into_iter().find(|&id| !graph.contains(id)) {
                return Err(GraphError::Parse {
                    line,
                    message: format!("edge to undeclared node v{}", missing.0),
                });
            }
            graph.link_many(src, tgt, m)?;
        }
        graph.set_inputs(in_order(inputs))?;
        graph.set_outputs(in_order(outputs))?;

        debug!(
            "parsed dot graph: {} nodes, {} inputs, {} outputs",
            graph.len(),
            graph.inputs().len(),
            graph.outputs().len()
        );
        Ok(graph)
    }
}

fn in_order(mut boundary: Vec<(usize, NodeId)>) -> Vec<NodeId> {
    boundary.sort_by_key(|&(pos, _)| pos);
    boundary.into_iter().map(|(_, id)| id).collect()
}

fn parse_id(name: &str) -> Result<NodeId, String> {
    name.strip_prefix('v')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .map(NodeId)
        .ok_or_else(|| format!("bad node name {:?}", name))
}

// `key=value, key="quoted \"value\""`
fn parse_attrs(body: &str) -> Result<Vec<(String, String)>, String> {
    let mut attrs = Vec::new();
    let mut chars = body.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace() || *c == ',').is_some() {}
        let Some(&first) = chars.peek() else {
            break;
        };

        let mut key = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_alphanumeric() || *c == '_') {
            key.push(c);
        }
        if key.is_empty() {
            return Err(format!("unexpected {:?} in attribute list", first));
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.next() != Some('=') {
            return Err(format!("expected `=` after attribute {:?}", key));
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        if chars.next_if_eq(&'"').is_some() {
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some('\\') => match chars.next() {
                        Some('n') => value.push('\n'),
                        Some(c) => value.push(c),
                        None => return Err("unterminated string".to_string()),
                    },
                    Some(c) => value.push(c),
                    None => return Err("unterminated string".to_string()),
                }
            }
        } else {
            while let Some(c) = chars.next_if(|c| !c.is_whitespace() && *c != ',') {
                value.push(c);
            }
        }
        attrs.push((key, value));
    }
    Ok(attrs)
}
