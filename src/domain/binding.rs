//! Directive binding kinds and values

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// Payload handed to success and error callbacks
#[derive(Debug, Clone, PartialEq)]
pub struct CopyPayload<Ev> {
    /// The value that was copied (after producer resolution)
    pub value: Value,
    /// The click event that triggered the copy
    pub event: Ev,
}

/// Callback invoked after a click-triggered copy
pub type CopyCallback<Ev> = Rc<dyn Fn(&CopyPayload<Ev>)>;

/// Where a copy binding gets its value from.
///
/// Resolved on every click, so a producer sees the state at click time.
#[derive(Clone)]
pub enum ValueSource {
    /// A fixed value
    Literal(Value),
    /// A zero-argument producer called on each click
    Producer(Rc<dyn Fn() -> Value>),
}

impl ValueSource {
    /// Create a literal source
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a producer source
    pub fn producer<F>(producer: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        Self::Producer(Rc::new(producer))
    }

    /// Resolve to the value to copy
    pub fn resolve(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Producer(producer) => producer(),
        }
    }
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// The three behaviours a directive binding can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BindingKind {
    /// Click-to-copy (no argument)
    #[default]
    Copy,
    /// Callback after a successful copy (`success` argument)
    Success,
    /// Callback after a failed copy (`error` argument)
    Error,
}

impl BindingKind {
    /// Map a directive argument to a kind.
    ///
    /// Unknown arguments fall back to click-to-copy.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("success") => Self::Success,
            Some("error") => Self::Error,
            _ => Self::Copy,
        }
    }

    /// Element data attribute that stores the handler id for this kind
    pub const fn data_key(&self) -> &'static str {
        match self {
            Self::Copy => "clipboardClickHandler",
            Self::Success => "clipboardSuccessHandler",
            Self::Error => "clipboardErrorHandler",
        }
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directive binding, decided once at bind time
pub enum Binding<Ev> {
    /// Click-to-copy. `None` means no value was supplied and clicks do nothing.
    Copy(Option<ValueSource>),
    /// Success callback
    Success(CopyCallback<Ev>),
    /// Error callback
    Error(CopyCallback<Ev>),
}

impl<Ev> Binding<Ev> {
    /// Click-to-copy binding with a value
    pub fn copy(source: ValueSource) -> Self {
        Self::Copy(Some(source))
    }

    /// Click-to-copy binding declared without a value
    pub fn copy_without_value() -> Self {
        Self::Copy(None)
    }

    /// Success callback binding
    pub fn on_success<F>(callback: F) -> Self
    where
        F: Fn(&CopyPayload<Ev>) + 'static,
    {
        Self::Success(Rc::new(callback))
    }

    /// Error callback binding
    pub fn on_error<F>(callback: F) -> Self
    where
        F: Fn(&CopyPayload<Ev>) + 'static,
    {
        Self::Error(Rc::new(callback))
    }

    /// Kind of this binding
    pub fn kind(&self) -> BindingKind {
        match self {
            Self::Copy(_) => BindingKind::Copy,
            Self::Success(_) => BindingKind::Success,
            Self::Error(_) => BindingKind::Error,
        }
    }
}

impl<Ev> fmt::Debug for Binding<Ev> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy(source) => f.debug_tuple("Copy").field(source).finish(),
            Self::Success(_) => f.write_str("Success(..)"),
            Self::Error(_) => f.write_str("Error(..)"),
        }
    }
}
