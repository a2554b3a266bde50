//! Go expression builders.

use passgen_codegen::builder::CodeFragment;
use passgen_core::quote_go_string;

/// A Go expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Emitted verbatim: identifiers, selectors, numbers
    Raw(String),
    /// A quoted string literal
    Str(String),
    Composite(Composite),
    Call(Call),
    Func(FuncLit),
}

impl Expr {
    pub fn raw(code: impl Into<String>) -> Self {
        Expr::Raw(code.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    /// Render the expression with `prefix` before its first line and
    /// `suffix` after its last line.
    pub fn to_fragment(&self, prefix: &str, suffix: &str) -> CodeFragment {
        match self {
            Expr::Raw(code) => CodeFragment::line(format!("{prefix}{code}{suffix}")),
            Expr::Str(value) => {
                CodeFragment::line(format!("{prefix}{}{suffix}", quote_go_string(value)))
            }
            Expr::Composite(composite) => composite.to_fragment(prefix, suffix),
            Expr::Call(call) => call.to_fragment(prefix, suffix),
            Expr::Func(func) => func.to_fragment(prefix, suffix),
        }
    }
}

impl From<Composite> for Expr {
    fn from(value: Composite) -> Self {
        Expr::Composite(value)
    }
}

impl From<Call> for Expr {
    fn from(value: Call) -> Self {
        Expr::Call(value)
    }
}

impl From<FuncLit> for Expr {
    fn from(value: FuncLit) -> Self {
        Expr::Func(value)
    }
}

/// An element of a composite literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Keyed(String, Expr),
    Positional(Expr),
}

/// A composite literal such as `cli.StringFlag{...}` or `[]cli.Command{...}`.
///
/// Elements are rendered one per line with a trailing comma. The type is
/// omitted for elided element literals (`{ Name: "x", }` inside a slice).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composite {
    ty: String,
    elements: Vec<Element>,
}

impl Composite {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            elements: Vec::new(),
        }
    }

    /// A literal whose type is implied by its enclosing slice.
    pub fn elided() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.elements.push(Element::Keyed(key.into(), value.into()));
        self
    }

    /// Add a keyed element only when `value` is present.
    pub fn field_opt(self, key: impl Into<String>, value: Option<impl Into<Expr>>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn item(mut self, value: impl Into<Expr>) -> Self {
        self.elements.push(Element::Positional(value.into()));
        self
    }

    pub fn items(mut self, values: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        self.elements
            .extend(values.into_iter().map(|v| Element::Positional(v.into())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn to_fragment(&self, prefix: &str, suffix: &str) -> CodeFragment {
        if self.elements.is_empty() {
            return CodeFragment::line(format!("{prefix}{}{{}}{suffix}", self.ty));
        }

        let body = self
            .elements
            .iter()
            .map(|element| match element {
                Element::Keyed(key, value) => value.to_fragment(&format!("{key}: "), ","),
                Element::Positional(value) => value.to_fragment("", ","),
            })
            .collect();

        CodeFragment::block(
            format!("{prefix}{}{{", self.ty),
            body,
            format!("}}{suffix}"),
        )
    }
}

/// A call expression whose arguments are laid out one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    func: String,
    args: Vec<Expr>,
}

impl Call {
    pub fn new(func: impl Into<String>) -> Self {
        Self {
            func: func.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Expr>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn to_fragment(&self, prefix: &str, suffix: &str) -> CodeFragment {
        if self.args.is_empty() {
            return CodeFragment::line(format!("{prefix}{}(){suffix}", self.func));
        }

        let body = self.args.iter().map(|arg| arg.to_fragment("", ",")).collect();
        CodeFragment::block(
            format!("{prefix}{}(", self.func),
            body,
            format!("){suffix}"),
        )
    }
}

/// A function literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncLit {
    signature: String,
    body: Vec<String>,
}

impl FuncLit {
    /// `signature` is everything between `func` and the body, e.g.
    /// `(ctx *cli.Context) error`.
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            body: Vec::new(),
        }
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn to_fragment(&self, prefix: &str, suffix: &str) -> CodeFragment {
        CodeFragment::block(
            format!("{prefix}func{} {{", self.signature),
            self.body.iter().map(CodeFragment::line).collect(),
            format!("}}{suffix}"),
        )
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::raw(value)
    }
}
