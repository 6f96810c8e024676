//! Macro-based dispatch for the SettingsEntry enum.

/// Dispatches a method call to the inner entry of a SettingsEntry variant.
///
/// Usage:
/// ```ignore
/// dispatch_entry!(self, method_name)
/// dispatch_entry!(self, method_name, arg1, arg2)
/// ```
macro_rules! dispatch_entry {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            Self::Image(entry) => entry.$method($($arg),*),
            Self::Switch(entry) => entry.$method($($arg),*),
            Self::Text(entry) => entry.$method($($arg),*),
        }
    };
}

pub(crate) use dispatch_entry;
