//! Boundary checks for raw request fields. Creation enforces the minimum
//! lengths; partial updates only go through the domain newtypes.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::news::{NewsContent, NewsTitle};
use chrono::NaiveDate;

const MIN_TITLE_CHARS: usize = 5;
const MIN_CONTENT_CHARS: usize = 10;

pub(super) fn create_title(raw: String) -> ApplicationResult<NewsTitle> {
    if raw.trim().chars().count() < MIN_TITLE_CHARS {
        return Err(ApplicationError::validation(format!(
            "title must be at least {MIN_TITLE_CHARS} characters"
        )));
    }
    Ok(NewsTitle::new(raw)?)
}

pub(super) fn create_content(raw: String) -> ApplicationResult<NewsContent> {
    if raw.trim().chars().count() < MIN_CONTENT_CHARS {
        return Err(ApplicationError::validation(format!(
            "content must be at least {MIN_CONTENT_CHARS} characters"
        )));
    }
    Ok(NewsContent::new(raw)?)
}

pub(super) fn parse_date(raw: &str) -> ApplicationResult<NaiveDate> {
    raw.trim().parse::<NaiveDate>().map_err(|_| {
        ApplicationError::validation(format!("date must be a calendar date (YYYY-MM-DD): {raw}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_title_is_rejected_on_create() {
        assert!(create_title("News".into()).is_err());
        assert!(create_title("Launch".into()).is_ok());
    }

    #[test]
    fn short_content_is_rejected_on_create() {
        assert!(create_content("too short".into()).is_err());
        assert!(create_content("Product launch today".into()).is_ok());
    }

    #[test]
    fn date_must_be_calendar_format() {
        assert!(parse_date("2025-05-21").is_ok());
        assert!(parse_date(" 2025-05-21 ").is_ok());
        assert!(parse_date("21/05/2025").is_err());
        assert!(parse_date("not a date").is_err());
    }
}
