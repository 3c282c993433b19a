use std::fmt;

/// Glyph placed before an entry's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// Any sibling but the last
    Middle,
    /// Last surviving sibling in its directory
    Last,
}

impl Connector {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Connector::Last
        } else {
            Connector::Middle
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Connector::Middle => "├── ",
            Connector::Last => "└── ",
        }
    }

    /// Indentation token inherited by this entry's children.
    pub fn indent(self) -> Indent {
        match self {
            Connector::Middle => Indent::Continue,
            Connector::Last => Indent::Blank,
        }
    }
}

/// One level of indentation under an ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Ancestor has later siblings, draw the vertical line
    Continue,
    /// Ancestor was last, pad with spaces
    Blank,
}

impl Indent {
    pub fn as_str(self) -> &'static str {
        match self {
            Indent::Continue => "│   ",
            Indent::Blank => "    ",
        }
    }
}

/// Indentation accumulated from the root down to the current directory.
///
/// A prefix is never modified in place: descending into a directory builds a
/// new one with [`Prefix::descend`], so an entry at depth `d` carries exactly
/// `d` tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix {
    tokens: Vec<Indent>,
}

impl Prefix {
    /// Empty prefix used for the root's children.
    pub fn root() -> Self {
        Self::default()
    }

    /// Prefix for the children of an entry drawn with `parent`.
    pub fn descend(&self, parent: Connector) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.push(parent.indent());
        Self { tokens }
    }

    /// Number of ancestors below the root.
    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[Indent] {
        &self.tokens
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}
