//! Error types for loan loading/export and the content store

use thiserror::Error;

/// Errors raised while reading or writing loan data files
#[derive(Debug, Error)]
pub enum LoanError {
    /// Underlying file could not be opened or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV row could not be parsed or written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Start date column was not a valid `YYYY-MM-DD` date
    #[error("Invalid start date '{value}' for loan '{name}'")]
    InvalidDate {
        name: String,
        value: String,
    },

    /// Term longer than the supported maximum
    #[error("Term too long for loan '{name}': at most {max_months} months")]
    TermTooLong {
        name: String,
        max_months: u32,
    },

    /// More saved scenarios than a scenario book can hold
    #[error("Scenario book holds at most {max} entries, got {count}")]
    TooManyScenarios {
        count: usize,
        max: usize,
    },
}

pub type LoadResult<T> = Result<T, LoanError>;

/// Errors raised by the article/taxonomy store
#[derive(Debug, Error)]
pub enum ContentError {
    /// No article row with this id
    #[error("Article not found: {id}")]
    ArticleNotFound {
        id: u64,
    },

    /// The backing store rejected the operation
    #[error("Store error: {message}")]
    Store {
        message: String,
    },
}

pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = LoanError::InvalidDate {
            name: "Car".to_string(),
            value: "2024-13-01".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid start date '2024-13-01' for loan 'Car'");
    }

    #[test]
    fn test_term_too_long_message() {
        let err = LoanError::TermTooLong {
            name: "Forever".to_string(),
            max_months: 1200,
        };
        assert_eq!(err.to_string(), "Term too long for loan 'Forever': at most 1200 months");
    }

    #[test]
    fn test_article_not_found_message() {
        let err = ContentError::ArticleNotFound { id: 42 };
        assert_eq!(err.to_string(), "Article not found: 42");
    }
}
