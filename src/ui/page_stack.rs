//! Navigation history of the settings window.

/// What the view has to do after a stack operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackMove {
    /// Show `to`, handing `from`'s entries back to the page set.
    Switch { from: String, to: String },
    /// The requested page is already shown.
    Stay,
    /// Back was requested on the root page.
    Quit,
}

/// Ids of the open pages, root first. The last one is shown.
#[derive(Debug)]
pub struct PageStack {
    ids: Vec<String>,
}

impl PageStack {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            ids: vec![root.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.ids.last().map(String::as_str).unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.ids.len()
    }

    /// Open `target`. A page already on the stack is returned to, dropping
    /// everything opened after it.
    pub fn navigate(&mut self, target: &str) -> StackMove {
        if self.current() == target {
            return StackMove::Stay;
        }

        let from = self.current().to_string();
        match self.ids.iter().position(|id| id == target) {
            Some(pos) => self.ids.truncate(pos + 1),
            None => self.ids.push(target.to_string()),
        }

        StackMove::Switch {
            from,
            to: target.to_string(),
        }
    }

    /// Close the current page.
    pub fn back(&mut self) -> StackMove {
        if self.ids.len() <= 1 {
            return StackMove::Quit;
        }

        let from = self.ids.pop().unwrap_or_default();
        StackMove::Switch {
            from,
            to: self.current().to_string(),
        }
    }
}
