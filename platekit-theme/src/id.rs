//! # Widget Identifiers
//!
//! A [WidgetId] names a widget type (not an instance) by namespace and type
//! name, e.g. `platekit-widgets:Button`. Hosts use it to recognise the styled
//! widgets they receive from the factories.
//!
//! ```rust
//! use platekit_theme::id::WidgetId;
//!
//! let button_id = WidgetId::new("platekit-widgets", "Button");
//! assert_eq!(button_id.namespace(), "platekit-widgets");
//! assert_eq!(button_id.id(), "Button");
//! assert_eq!(button_id.to_string(), "platekit-widgets:Button");
//! ```

use std::fmt::{Debug, Display, Formatter};

/// An identifier for a widget type.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id by a namespace and custom id.
    /// The namespace should be the crate name and the id should be the widget type name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
