use time::{Date, Month};

use crate::error::ApiError;

fn invalid_token(token: &str) -> ApiError {
    ApiError::Validation(format!("Invalid month token '{}', expected YYYY-MM", token))
}

/// Parse a `YYYY-MM` token into its year and month.
pub fn parse_month_token(token: &str) -> Result<(i32, Month), ApiError> {
    let bytes = token.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return Err(invalid_token(token));
    }

    let (year_part, month_part) = (&token[..4], &token[5..]);
    if !year_part.bytes().all(|b| b.is_ascii_digit())
        || !month_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid_token(token));
    }

    let year: i32 = year_part.parse().map_err(|_| invalid_token(token))?;
    let month_number: u8 = month_part.parse().map_err(|_| invalid_token(token))?;
    let month = Month::try_from(month_number).map_err(|_| invalid_token(token))?;

    Ok((year, month))
}

/// Half-open interval for a month token: the first day of the month and the
/// first day of the following month. December rolls over to January of the
/// next year.
pub fn month_range(token: &str) -> Result<(Date, Date), ApiError> {
    let (year, month) = parse_month_token(token)?;

    let start = Date::from_calendar_date(year, month, 1).map_err(|_| invalid_token(token))?;
    let next_month_start = match month {
        Month::December => Date::from_calendar_date(year + 1, Month::January, 1),
        _ => Date::from_calendar_date(year, month.next(), 1),
    }
    .map_err(|_| invalid_token(token))?;

    Ok((start, next_month_start))
}

/// `start <= date < next_month_start`. This test is the single source of
/// truth for "transactions in month M" across listing and reporting.
pub fn in_month(date: Date, start: Date, next_month_start: Date) -> bool {
    start <= date && date < next_month_start
}
