use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::post::{Category, Post, PostInput, Status};

pub const TITLE_MIN_CHARS: u64 = 20;
pub const CONTENT_MIN_CHARS: u64 = 200;

/// State of the post editor, as submitted by the add and edit forms.
///
/// Both submit buttons are named `status`; the pressed one decides whether
/// the post is published or saved as a draft.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PostForm {
    #[validate(length(min = TITLE_MIN_CHARS, message = "Title must be at least 20 characters"))]
    pub title: String,

    #[validate(length(min = CONTENT_MIN_CHARS, message = "Content must be at least 200 characters"))]
    pub content: String,

    #[validate(custom(function = validate_category))]
    pub category: String,

    pub status: Option<Status>,

    /// Status the post had when the edit form was opened. Drives the Cancel link.
    pub original_status: Option<Status>,
}

impl PostForm {
    /// Browsers submit textarea line breaks as CRLF. Rewrites them (and lone
    /// CR) to LF so a line break counts as one character, as it did in the
    /// editor.
    pub fn normalized(mut self) -> Self {
        self.title = normalize_newlines(&self.title);
        self.content = normalize_newlines(&self.content);
        self
    }

    /// Only `Publish` is honored as-is; anything else is saved as a draft.
    pub fn submitted_status(&self) -> Status {
        match self.status {
            Some(Status::Publish) => Status::Publish,
            _ => Status::Draft,
        }
    }

    pub fn to_input(&self, status: Status) -> PostInput {
        PostInput {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            status,
        }
    }

    /// Runs the field rules and returns the errors to display, if any.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|errors| FormErrors::from(&errors))
    }

    pub fn title_chars(&self) -> usize {
        self.title.chars().count()
    }

    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

impl From<&Post> for PostForm {
    fn from(post: &Post) -> Self {
        let status = if post.status == Status::Publish {
            Status::Publish
        } else {
            Status::Draft
        };

        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            category: post.category.clone(),
            status: Some(status),
            original_status: Some(post.status),
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.parse::<Category>().is_err() {
        return Err(ValidationError::new("category")
            .with_message(Cow::Borrowed("Please select a category")));
    }
    Ok(())
}

/// Error messages shown next to form fields, plus an optional notice for
/// failures that belong to no field.
///
/// Rebuilt on every submission, so a field that has been corrected loses its
/// error on the next round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
    notice: Option<String>,
}

impl FormErrors {
    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            notice: Some(notice.into()),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.notice.is_none()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.fields.insert(field.to_string(), message.into());
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Folds errors reported by the API into the form.
    ///
    /// A field keeps its local message if it already has one. Errors on fields
    /// the form does not render end up in the notice.
    pub fn merge_remote(&mut self, message: Option<&str>, fields: &[(String, String)]) {
        let mut stray = Vec::new();
        for (field, msg) in fields {
            match field.as_str() {
                "title" | "content" | "category" => {
                    self.fields
                        .entry(field.clone())
                        .or_insert_with(|| msg.clone());
                }
                _ => stray.push(msg.as_str()),
            }
        }

        if !stray.is_empty() {
            self.notice = Some(stray.join(". "));
        } else if fields.is_empty() {
            if let Some(message) = message {
                self.notice = Some(message.to_string());
            }
        }
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FormErrors::default();
        for (field, errs) in errors.field_errors() {
            if let Some(message) = errs.iter().find_map(|e| e.message.as_ref()) {
                out.insert(field.as_ref(), message.to_string());
            }
        }
        out
    }
}
