//! Pure schema checks for request payloads. Each function either hands the
//! typed payload back or returns every violated field constraint.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::blog::dto::{CreateBlogRequest, UpdateBlogRequest};
use crate::users::dto::{SigninRequest, SignupRequest};

/// One violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validation failure carrying all issues, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", issue.field, issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn finish<T>(value: T, issues: Vec<FieldIssue>) -> Result<T, ValidationError> {
    if issues.is_empty() {
        Ok(value)
    } else {
        Err(ValidationError { issues })
    }
}

pub fn signup(input: SignupRequest) -> Result<SignupRequest, ValidationError> {
    let mut issues = Vec::new();
    if !is_valid_email(&input.email) {
        issues.push(FieldIssue {
            field: "email",
            message: "must be a valid email",
        });
    }
    if input.password.len() < 6 {
        issues.push(FieldIssue {
            field: "password",
            message: "must be at least 6 characters",
        });
    }
    finish(input, issues)
}

pub fn signin(input: SigninRequest) -> Result<SigninRequest, ValidationError> {
    let mut issues = Vec::new();
    if !is_valid_email(&input.email) {
        issues.push(FieldIssue {
            field: "email",
            message: "must be a valid email",
        });
    }
    if input.password.len() < 6 {
        issues.push(FieldIssue {
            field: "password",
            message: "must be at least 6 characters",
        });
    }
    finish(input, issues)
}

/// `content` may be empty; only the title is constrained.
pub fn create_blog(input: CreateBlogRequest) -> Result<CreateBlogRequest, ValidationError> {
    let mut issues = Vec::new();
    if input.title.is_empty() {
        issues.push(FieldIssue {
            field: "title",
            message: "must not be empty",
        });
    }
    finish(input, issues)
}

pub fn update_blog(input: UpdateBlogRequest) -> Result<UpdateBlogRequest, ValidationError> {
    let mut issues = Vec::new();
    if input.id.is_empty() {
        issues.push(FieldIssue {
            field: "id",
            message: "must not be empty",
        });
    }
    if input.title.is_empty() {
        issues.push(FieldIssue {
            field: "title",
            message: "must not be empty",
        });
    }
    finish(input, issues)
}
