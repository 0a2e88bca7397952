//! Accommodation search form

use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const REQUIRED: &str = "Required";
pub const INVALID_DATE: &str = "Invalid date";
pub const END_BEFORE_START: &str = "Must be after start date";
pub const SEARCH_FAILED: &str = "Search failed";

/// Field-level and form-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Error of the whole submission
    pub form: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.form.is_none()
    }
}

/// Search form values as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub start_date: String,
    pub end_date: String,
    pub errors: FormErrors,
}

impl SearchForm {
    /// Form prefilled with a one-night stay starting `today`
    pub fn new(today: NaiveDate) -> Self {
        let tomorrow = today.succ_opt().unwrap_or(today);
        Self {
            start_date: today.format(DATE_FORMAT).to_string(),
            end_date: tomorrow.format(DATE_FORMAT).to_string(),
            errors: FormErrors::default(),
        }
    }

    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Overwrite the fields that were given
    pub fn fill(&mut self, start_date: Option<&str>, end_date: Option<&str>) {
        if let Some(start) = start_date {
            self.start_date = start.trim().to_string();
        }
        if let Some(end) = end_date {
            self.end_date = end.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), FormErrors> {
        let start = parse_date(&self.start_date);
        let end = parse_date(&self.end_date);

        match (start, end) {
            (Ok(start), Ok(end)) if end > start => Ok((start, end)),
            (Ok(_), Ok(_)) => Err(FormErrors {
                end_date: Some(END_BEFORE_START.to_string()),
                ..Default::default()
            }),
            (start, end) => Err(FormErrors {
                start_date: start.err(),
                end_date: end.err(),
                form: None,
            }),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(REQUIRED.to_string());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| INVALID_DATE.to_string())
}
