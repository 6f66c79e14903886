//! Gift-oracle panel state machine and wire format.
//!
//! The panel is purely request/response: one submission in flight at most,
//! a single failure kind, no retry. The async transport lives in the web
//! crate; this module holds everything testable on the host.

use serde::Deserialize;
use thiserror::Error;

/// Payload returned by the text-generation service.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct WishResponse {
    pub message: String,
    #[serde(rename = "luxuryGift")]
    pub luxury_gift: String,
    pub affirmation: String,
}

impl WishResponse {
    /// Fixed payload used when the service answers with something that is
    /// not the expected JSON shape. A malformed response is replaced, not
    /// surfaced as a parse error.
    pub fn fallback() -> Self {
        Self {
            message: "May your holidays be as radiant as the finest emeralds.".into(),
            luxury_gift: "A custom-crafted golden timepiece.".into(),
            affirmation: "You are the architect of your own brilliance.".into(),
        }
    }

    pub fn from_json(text: &str) -> Self {
        serde_json::from_str(text.trim()).unwrap_or_else(|_| Self::fallback())
    }
}

/// The one failure kind the panel distinguishes.
#[derive(Debug, Error)]
pub enum WishError {
    #[error("wish generation failed: {0}")]
    Generation(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiStatus {
    Idle,
    Loading,
    Result,
    Error,
}

/// Dialog state machine. Transitions:
/// Idle/Error/Result --begin_submit--> Loading --finish--> Result | Error.
#[derive(Debug)]
pub struct OraclePanel {
    status: UiStatus,
    result: Option<WishResponse>,
}

impl Default for OraclePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl OraclePanel {
    pub fn new() -> Self {
        Self {
            status: UiStatus::Idle,
            result: None,
        }
    }

    #[inline]
    pub fn status(&self) -> UiStatus {
        self.status
    }

    #[inline]
    pub fn result(&self) -> Option<&WishResponse> {
        self.result.as_ref()
    }

    /// Blank input never submits; neither does a submission while another
    /// one is outstanding (the submit control is disabled during Loading).
    pub fn can_submit(&self, wish_text: &str) -> bool {
        !wish_text.trim().is_empty() && self.status != UiStatus::Loading
    }

    /// Returns whether the submission was accepted.
    pub fn begin_submit(&mut self, wish_text: &str) -> bool {
        if !self.can_submit(wish_text) {
            return false;
        }
        self.status = UiStatus::Loading;
        true
    }

    /// Complete the outstanding request. Returns `true` when the tree
    /// should assemble (success forces the scene into tree shape); a
    /// failure keeps the mode untouched and stores no partial result.
    pub fn finish(&mut self, outcome: Result<WishResponse, WishError>) -> bool {
        match outcome {
            Ok(wish) => {
                self.result = Some(wish);
                self.status = UiStatus::Result;
                true
            }
            Err(err) => {
                log::warn!("{err}");
                self.result = None;
                self.status = UiStatus::Error;
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.status = UiStatus::Idle;
        self.result = None;
    }
}
