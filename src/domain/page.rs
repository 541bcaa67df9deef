// src/domain/page.rs
use crate::domain::Note;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page-size input as the user entered it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Input cleared; no page can be requested until a value is entered
    Blank,
    Value(u32),
}

impl Limit {
    /// Interpret raw page-size input.
    ///
    /// Returns `None` for input that must be ignored (non-numeric, zero,
    /// negative). An empty string is accepted as [`Limit::Blank`].
    pub fn parse_input(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return Some(Limit::Blank);
        }
        match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => Some(Limit::Value(n)),
            _ => None,
        }
    }

    pub fn value(self) -> Option<u32> {
        match self {
            Limit::Blank => None,
            Limit::Value(n) => Some(n),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Blank => Ok(()),
            Limit::Value(n) => write!(f, "{n}"),
        }
    }
}

/// One page to fetch, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

/// Body of the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesPage {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}
