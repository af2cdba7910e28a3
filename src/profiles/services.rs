use lazy_static::lazy_static;
use regex::Regex;
use time::{macros::format_description, Date};

use super::{dto::ProfileSubmission, errors::ValidationError};

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref BIRTH_DATE_RE: Regex = Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap();
}

pub(crate) fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// `DD/MM/YYYY` that also names a real calendar day.
pub(crate) fn is_valid_birth_date(value: &str) -> bool {
    BIRTH_DATE_RE.is_match(value)
        && Date::parse(value, format_description!("[day]/[month]/[year]")).is_ok()
}

/// Checks a submission before it reaches storage. First failing rule wins.
pub fn validate(submission: &ProfileSubmission) -> Result<(), ValidationError> {
    let fields = [
        &submission.first_name,
        &submission.last_name,
        &submission.email,
        &submission.phone,
        &submission.profile_image,
        &submission.birth_date,
        &submission.occupation,
        &submission.sex,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingField);
    }

    if !is_valid_phone(&submission.phone) {
        return Err(ValidationError::InvalidPhoneFormat);
    }

    if !is_valid_birth_date(&submission.birth_date) {
        return Err(ValidationError::InvalidDateFormat);
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_submission() -> ProfileSubmission {
    ProfileSubmission {
        first_name: "A".into(),
        last_name: "B".into(),
        email: "a@b.com".into(),
        phone: "0812345678".into(),
        profile_image: "aGVsbG8=".into(),
        birth_date: "01/01/1990".into(),
        occupation: "Tester".into(),
        sex: "M".into(),
    }
}
