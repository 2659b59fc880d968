//! Opening announcement links in the system browser.

/// Opens an external URL.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Empty link")]
    EmptyUrl,

    #[error("Failed to open link: {0}")]
    Launch(#[source] std::io::Error),
}

/// Hands the URL to the platform's default handler without waiting on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(OpenError::EmptyUrl);
        }
        open::that_detached(url).map_err(OpenError::Launch)
    }
}

/// Fire-and-forget link open. Failures are logged and dropped; the caller
/// never learns whether the browser came up.
pub fn open_link(opener: &dyn LinkOpener, url: &str) {
    match opener.open(url) {
        Ok(()) => tracing::debug!(url, "Opened announcement link"),
        Err(e) => tracing::debug!(url, "Ignoring failed link open: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), OpenError> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl LinkOpener for FailingOpener {
        fn open(&self, _url: &str) -> Result<(), OpenError> {
            Err(OpenError::Launch(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )))
        }
    }

    #[test]
    fn test_open_link_delegates() {
        let opener = RecordingOpener::default();
        open_link(&opener, "https://example.com/issue/1");
        assert_eq!(*opener.opened.borrow(), vec!["https://example.com/issue/1"]);
    }

    #[test]
    fn test_open_link_keeps_query_intact() {
        let url = "https://example.com/issue?a=1&b=2&calc=\"x\"|y";
        let opener = RecordingOpener::default();
        open_link(&opener, url);
        assert_eq!(*opener.opened.borrow(), vec![url]);
    }

    #[test]
    fn test_open_link_swallows_failure() {
        // Must return normally even though the opener fails.
        open_link(&FailingOpener, "https://example.com/issue/1");
    }

    #[test]
    fn test_system_opener_rejects_empty() {
        assert!(matches!(SystemOpener.open("  "), Err(OpenError::EmptyUrl)));
    }

    #[test]
    fn test_launch_error_keeps_source() {
        let err = OpenError::Launch(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(std::error::Error::source(&err).is_some());
    }
}
