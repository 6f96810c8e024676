use std::fmt;
use std::sync::Arc;

/// A caller-supplied capability invoked when a row is activated.
///
/// Cloning shares the underlying closure.
#[derive(Clone)]
pub struct Callback {
    name: Option<String>,
    func: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    pub fn new(func: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Create a callback with a name that shows up in log lines.
    pub fn named(name: impl Into<String>, func: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn invoke(&self) {
        tracing::debug!(callback = self.name().unwrap_or("<anonymous>"), "Invoking callback");
        (self.func)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Identifier of an internal screen that a row can navigate to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavTarget(String);

impl NavTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happens when an image row is clicked.
#[derive(Clone, Debug)]
pub enum EntryAction {
    /// Open an external link
    Url(String),
    /// Open another screen
    Navigate(NavTarget),
    /// Run a caller-supplied callback
    Invoke(Callback),
}

impl EntryAction {
    /// Pick one action out of a set of optional sources.
    ///
    /// Links win over navigation targets, which win over callbacks.
    pub fn first_of(
        url: Option<String>,
        target: Option<NavTarget>,
        callback: Option<Callback>,
    ) -> Option<Self> {
        url.map(Self::Url)
            .or_else(|| target.map(Self::Navigate))
            .or_else(|| callback.map(Self::Invoke))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_callback_invoke_runs_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let callback = Callback::new(move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        callback.invoke();
        callback.clone().invoke();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_first_of_prefers_url() {
        let action = EntryAction::first_of(
            Some("https://example.com".to_string()),
            Some(NavTarget::new("about")),
            Some(Callback::new(|| {})),
        );
        assert!(matches!(action, Some(EntryAction::Url(url)) if url == "https://example.com"));
    }

    #[test]
    fn test_first_of_prefers_target_over_callback() {
        let action =
            EntryAction::first_of(None, Some(NavTarget::new("about")), Some(Callback::new(|| {})));
        assert!(matches!(action, Some(EntryAction::Navigate(t)) if t.as_str() == "about"));
    }

    #[test]
    fn test_first_of_empty() {
        assert!(EntryAction::first_of(None, None, None).is_none());
    }
}
