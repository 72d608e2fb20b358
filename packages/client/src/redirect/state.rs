//! Redirect states and the per-call hop budget

use crate::http::Response;

/// Countdown of hops a single top-level call may still follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectBudget {
    remaining: u32,
}

impl RedirectBudget {
    #[must_use]
    pub fn new(max_redirects: u32) -> Self {
        Self {
            remaining: max_redirects,
        }
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.remaining == 0
    }

    /// Spends one hop.
    pub fn consume(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// What to do with a response that just arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    /// Redirect status, budget left: follow `location`.
    Eligible { location: String },
    /// Redirect status, no budget left: hand this response back.
    Exhausted,
    /// Anything else, including a redirect without `Location`.
    Terminal,
}

impl RedirectState {
    #[must_use]
    pub fn classify(response: &Response, budget: &RedirectBudget) -> Self {
        if !response.is_redirect() {
            return RedirectState::Terminal;
        }
        if budget.limit_reached() {
            return RedirectState::Exhausted;
        }
        match response.location() {
            Some(location) if !location.trim().is_empty() => RedirectState::Eligible {
                location: location.to_string(),
            },
            _ => RedirectState::Terminal,
        }
    }
}
