//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Emitters describe source as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns them into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A header line, a body indented one level, and a closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_constructor() {
        let block = CodeFragment::block("{", vec![CodeFragment::line("Name: \"x\",")], "},");
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "{");
                assert_eq!(body, vec![CodeFragment::line("Name: \"x\",")]);
                assert_eq!(close, "},");
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
