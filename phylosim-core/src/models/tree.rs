use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{NewickError, NewickResult};

///
/// Produce a value that shares no structure with `self`.
///
/// Mutating the copy, or any part of it, must never be observable through the original or
/// through another copy.
///
pub trait DeepCopy {
    fn deep_copy(&self) -> Self;
}

///
/// Node struct, one node of a phylogenetic tree.
///
#[derive(Debug, PartialEq, Default)]
pub struct Node {
    pub name: Option<String>,
    pub branch_length: Option<f64>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: Option<String>, branch_length: Option<f64>) -> Self {
        Node {
            name,
            branch_length,
            children: Vec::new(),
        }
    }

    pub fn leaf<S: Into<String>>(name: S, branch_length: f64) -> Self {
        Node::new(Some(name.into()), Some(branch_length))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of tip nodes in the subtree rooted here.
    pub fn leaves_count(&self) -> usize {
        match self.is_leaf() {
            true => 1,
            false => self.children.iter().map(Node::leaves_count).sum(),
        }
    }

    /// Names of the tip nodes below this node, left to right. Unnamed tips are skipped.
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_leaf_names(&mut names);
        names
    }

    fn collect_leaf_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if self.is_leaf() {
            if let Some(name) = self.name.as_deref() {
                names.push(name);
            }
            return;
        }
        for child in &self.children {
            child.collect_leaf_names(names);
        }
    }
}

impl DeepCopy for Node {
    fn deep_copy(&self) -> Self {
        Node {
            name: self.name.clone(),
            branch_length: self.branch_length,
            children: self.children.iter().map(DeepCopy::deep_copy).collect(),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_leaf() {
            write!(f, "(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")?;
        }
        if let Some(name) = &self.name {
            write!(f, "{}", name)?;
        }
        if let Some(length) = self.branch_length {
            write!(f, ":{}", length)?;
        }
        Ok(())
    }
}

///
/// PhyloTree struct, a rooted phylogenetic tree read from newick.
///
#[derive(Debug, PartialEq, Default)]
pub struct PhyloTree {
    pub root: Node,
}

impl PhyloTree {
    pub fn new(root: Node) -> Self {
        PhyloTree { root }
    }

    ///
    /// Read a tree from a file holding exactly one newick tree.
    ///
    pub fn from_path<P: AsRef<Path>>(path: P) -> NewickResult<Self> {
        let content = read_to_string(path)?;
        content.parse()
    }

    pub fn leaves_count(&self) -> usize {
        self.root.leaves_count()
    }

    pub fn leaf_names(&self) -> Vec<&str> {
        self.root.leaf_names()
    }
}

impl DeepCopy for PhyloTree {
    fn deep_copy(&self) -> Self {
        PhyloTree {
            root: self.root.deep_copy(),
        }
    }
}

impl Display for PhyloTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.root)
    }
}

impl FromStr for PhyloTree {
    type Err = NewickError;

    fn from_str(s: &str) -> NewickResult<Self> {
        let mut parser = NewickParser::new(s);
        parser.skip_whitespace();
        if parser.peek().is_none() {
            return Err(NewickError::Empty);
        }

        let root = parser.parse_subtree()?;
        parser.skip_whitespace();
        match parser.bump() {
            Some((_, ';')) => {}
            Some((pos, found)) => return Err(NewickError::UnexpectedChar { found, pos }),
            None => return Err(NewickError::UnexpectedEnd(s.len())),
        }

        parser.skip_whitespace();
        if let Some((pos, _)) = parser.peek() {
            return Err(NewickError::TrailingContent(pos));
        }

        Ok(PhyloTree { root })
    }
}

struct NewickParser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> NewickParser<'a> {
    fn new(input: &'a str) -> Self {
        NewickParser {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some((_, c)) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// subtree := ( "(" subtree ("," subtree)* ")" )? label? (":" length)?
    fn parse_subtree(&mut self) -> NewickResult<Node> {
        self.skip_whitespace();

        let mut children = Vec::new();
        if let Some((_, '(')) = self.peek() {
            self.bump();
            loop {
                children.push(self.parse_subtree()?);
                self.skip_whitespace();
                match self.bump() {
                    Some((_, ',')) => continue,
                    Some((_, ')')) => break,
                    Some((pos, found)) => return Err(NewickError::UnexpectedChar { found, pos }),
                    None => return Err(NewickError::UnexpectedEnd(self.input.len())),
                }
            }
        }

        self.skip_whitespace();
        let name = Some(self.take_token()).filter(|s| !s.is_empty());

        self.skip_whitespace();
        let branch_length = match self.peek() {
            Some((_, ':')) => {
                self.bump();
                self.skip_whitespace();
                let pos = self.peek().map_or(self.input.len(), |(pos, _)| pos);
                let value = self.take_token();
                let length = value
                    .parse::<f64>()
                    .map_err(|_| NewickError::InvalidBranchLength {
                        value: value.to_string(),
                        pos,
                    })?;
                Some(length)
            }
            _ => None,
        };

        Ok(Node {
            name: name.map(str::to_string),
            branch_length,
            children,
        })
    }

    /// Consume characters up to the next newick delimiter.
    fn take_token(&mut self) -> &'a str {
        let start = self.peek().map_or(self.input.len(), |(pos, _)| pos);
        let mut end = start;
        while let Some((pos, c)) = self.peek() {
            if matches!(c, '(' | ')' | ',' | ':' | ';') || c.is_whitespace() {
                break;
            }
            end = pos + c.len_utf8();
            self.bump();
        }
        &self.input[start..end]
    }
}
