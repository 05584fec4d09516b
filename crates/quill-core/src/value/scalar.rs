//! Terminal scalar values.

use std::fmt;

/// Whether a callable value is a plain function or a class constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableKind {
    /// A free function, closure or method.
    Function,
    /// A type constructor.
    Class,
}

impl fmt::Display for CallableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => write!(f, "Function"),
            Self::Class => write!(f, "Class"),
        }
    }
}

/// A callable passed as a log argument. Only its description is logged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callable {
    /// Function or class.
    pub kind: CallableKind,
    /// Introspected name, `None` when anonymous.
    pub name: Option<String>,
}

impl Callable {
    /// A named function.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            kind: CallableKind::Function,
            name: Some(name.into()),
        }
    }

    /// A named class.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            kind: CallableKind::Class,
            name: Some(name.into()),
        }
    }

    /// An anonymous function.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            kind: CallableKind::Function,
            name: None,
        }
    }

    /// Describe the type `T` as a class, named after the last path segment
    /// of its type name (`alloc::string::String` becomes `String`).
    #[must_use]
    pub fn of_type<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        let name = base.rsplit("::").next().unwrap_or(base);
        Self::class(name)
    }

    /// The `<Function name>` / `<Class name>` description.
    #[must_use]
    pub fn describe(&self) -> String {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("anonymous");
        format!("<{} {name}>", self.kind)
    }
}

/// A value that needs no further decomposition.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Scalar {
    /// Absent value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Double precision number, possibly non-finite.
    Number(f64),
    /// Integer wider than a double can represent exactly.
    BigInt(i128),
    /// Text.
    Text(String),
    /// Symbolic atom, holding its description.
    Symbol(String),
    /// Function or class.
    Callable(Callable),
}

impl Scalar {
    /// Text representation of a symbolic atom: `Symbol(description)`.
    #[must_use]
    pub fn symbol_text(description: &str) -> String {
        format!("Symbol({description})")
    }

    /// Returns `true` for [`Scalar::Undefined`].
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}
