use crate::entries::NavTarget;

/// Notice shown when a row without any configured action is clicked.
pub const NO_ACTION_NOTICE: &str = "No action configured for this item";

/// Receiver of the side effects a bound row can trigger.
pub trait ActionSink {
    /// Open an external link.
    fn open_url(&mut self, url: &str);

    /// Open an internal screen.
    fn navigate(&mut self, target: &NavTarget);

    /// Show a transient user-facing notice.
    fn notice(&mut self, message: &str);
}

/// A side effect requested by a row, recorded for the host to carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostRequest {
    OpenUrl(String),
    Navigate(NavTarget),
    Notice(String),
}

impl ActionSink for Vec<HostRequest> {
    fn open_url(&mut self, url: &str) {
        self.push(HostRequest::OpenUrl(url.to_string()));
    }

    fn navigate(&mut self, target: &NavTarget) {
        self.push(HostRequest::Navigate(target.clone()));
    }

    fn notice(&mut self, message: &str) {
        self.push(HostRequest::Notice(message.to_string()));
    }
}
