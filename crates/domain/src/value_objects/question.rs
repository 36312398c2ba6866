//! Question value object
//!
//! A question is the user-supplied prompt that is sent once to every
//! configured provider. It is validated at submission time and never mutated.
//!
//! # Examples
//!
//! ```
//! use domain::Question;
//!
//! let question = Question::new("  What is 2+2?  ").unwrap();
//! assert_eq!(question.as_str(), "What is 2+2?");
//!
//! assert!(Question::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated, non-empty question
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    #[validate(length(min = 1))]
    value: String,
}

impl Question {
    /// Create a question from user input
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyQuestion` if nothing but whitespace was supplied.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let value = text.into().trim().to_string();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|_| DomainError::EmptyQuestion)?;

        Ok(candidate)
    }

    /// Get the question text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length of the question in characters
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Question> for String {
    fn from(question: Question) -> Self {
        question.value
    }
}

impl AsRef<str> for Question {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
