//! Archive URL derivation. Pure: no I/O happens here.

use chrono::{Datelike, NaiveDateTime};
use url::Url;

use crate::error::DateError;
use crate::metadata::ImageRecord;
use crate::Error;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Archive URL of the last record in `records`.
///
/// The API lists images oldest first, so the last entry is taken as the most
/// recent. Dates are not compared; the array order is trusted as-is.
pub fn latest_archive_url(base: &Url, records: &[ImageRecord]) -> Result<Url, Error> {
    let latest = records.last().ok_or(Error::EmptyMetadata)?;

    tracing::debug!(image = %latest.image, date = %latest.date, "selected latest record");

    archive_url(base, latest)
}

/// `{base}{YYYY}/{MM}/{DD}/png/{image}.png` for a single record.
///
/// The image identifier is always a single path segment; `/`, `#` and `?` in it
/// are percent-encoded rather than interpreted.
pub fn archive_url(base: &Url, record: &ImageRecord) -> Result<Url, Error> {
    let date = parse_capture_date(&record.date).map_err(|source| Error::Date {
        date: record.date.clone(),
        source,
    })?;

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(&format!("{:04}", date.year()))
        .push(&format!("{:02}", date.month()))
        .push(&format!("{:02}", date.day()))
        .push("png")
        .push(&format!("{}.png", record.image));

    Ok(url)
}

/// Parses `YYYY-MM-DD HH:MM:SS`.
///
/// chrono lets a format space match any run of whitespace, including none, so
/// the single space between date and time is checked here first.
fn parse_capture_date(date: &str) -> Result<NaiveDateTime, DateError> {
    let (day, time) = date.split_once(' ').ok_or(DateError::Layout)?;

    let well_formed = [day, time]
        .iter()
        .all(|part| !part.is_empty() && !part.contains(char::is_whitespace));
    if !well_formed {
        return Err(DateError::Layout);
    }

    Ok(NaiveDateTime::parse_from_str(date, DATE_FORMAT)?)
}
