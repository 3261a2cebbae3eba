use crate::{error::SubmitError, protocol::GeneratePdfRequest};

pub const MIN_PAGES: u8 = 1;
pub const MAX_PAGES: u8 = 5;

/// Raw form state, exactly as typed into the six inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub word: String,
    pub pages: String,
    pub company: String,
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl FormInput {
    /// Checks the fields in display order and stops at the first failure.
    /// Text fields are sent trimmed.
    pub fn validate(&self) -> Result<GeneratePdfRequest, SubmitError> {
        let word = self.word.trim();
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(SubmitError::InvalidKeyword);
        }

        let pages = parse_page_count(&self.pages).ok_or(SubmitError::InvalidPageCount)?;

        let company = self.company.trim();
        let title = self.title.trim();
        let author = self.author.trim();
        let subject = self.subject.trim();
        if [company, title, author, subject]
            .iter()
            .any(|value| value.is_empty())
        {
            return Err(SubmitError::MissingField);
        }

        Ok(GeneratePdfRequest {
            word: word.to_string(),
            pages,
            company: company.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            subject: subject.to_string(),
        })
    }
}

/// The range check runs on the number as typed; only the accepted value is
/// truncated, so `2.5` is sent as `2` while `5.5` is still out of range.
fn parse_page_count(raw: &str) -> Option<u8> {
    let pages = raw.trim().parse::<f64>().ok()?;
    if !pages.is_finite() || pages < f64::from(MIN_PAGES) || pages > f64::from(MAX_PAGES) {
        return None;
    }
    Some(pages.trunc() as u8)
}
