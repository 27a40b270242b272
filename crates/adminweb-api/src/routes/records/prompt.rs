//! Confirmation answered by the request itself
//!
//! The browser asks the user (`hx-confirm`) before it sends a delete, and
//! marks the request with `confirm=true`. Requests without the flag are
//! treated as declined.

use adminweb_core::{Notice, Prompt};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RequestPrompt {
    confirmed: bool,
    notices: Vec<Notice>,
}

impl RequestPrompt {
    pub fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            notices: Vec::new(),
        }
    }

    /// Read the `confirm` query parameter
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let confirmed = params
            .get("confirm")
            .map_or(false, |v| v == "true" || v == "1");
        Self::new(confirmed)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }
}

impl Prompt for RequestPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if !self.confirmed {
            self.notices
                .push(Notice::info(format!("Confirmation required: {}", message)));
        }
        self.confirmed
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminweb_core::NoticeLevel;

    #[test]
    fn test_confirm_flag() {
        let mut params = HashMap::new();
        assert!(!RequestPrompt::from_params(&params).confirmed);
        params.insert("confirm".to_string(), "true".to_string());
        assert!(RequestPrompt::from_params(&params).confirmed);
        params.insert("confirm".to_string(), "no".to_string());
        assert!(!RequestPrompt::from_params(&params).confirmed);
    }

    #[test]
    fn test_unconfirmed_records_notice() {
        let mut prompt = RequestPrompt::new(false);
        assert!(!prompt.confirm("Are you sure you want to delete Pro Plan?"));
        assert_eq!(prompt.notices().len(), 1);
        assert_eq!(prompt.notices()[0].level, NoticeLevel::Info);

        let mut prompt = RequestPrompt::new(true);
        assert!(prompt.confirm("Are you sure?"));
        prompt.notify(Notice::success("Deleted"));
        assert_eq!(prompt.into_notices(), vec![Notice::success("Deleted")]);
    }
}
