use std::ops::Index;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ORIGIN_REGEX: Regex = Regex::new(r"https?://[^/]+").unwrap();
    static ref MEDIA_REGEX: Regex = Regex::new(r"https?://[^/]+/wp-content").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref DATE_TIME_REGEX: Regex = Regex::new(
        r#"(\d{4})-(\d{0,2})-(\d{0,2}) (\d{0,2}):(\d{0,2}):(\d{0,2})(\.\d{0,3})?"#
    ).unwrap();
}

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the `YYYY-MM-DD HH:MM:SS` dates WordPress writes in `wp:post_date`
pub fn parse_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    let Some(caps) = DATE_TIME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = to_u32(caps.index(4))?;
    let mn: u32 = to_u32(caps.index(5))?;
    let s: u32 = to_u32(caps.index(6))?;

    // Drafts carry 0000-00-00 00:00:00
    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return Err(format!("Invalid date {}", buf));
    };
    let Some(time) = NaiveTime::from_hms_opt(h, mn, s) else {
        return Err(format!("Invalid time {}", buf));
    };

    Ok(NaiveDateTime::new(date, time))
}

/// Parses an RSS `pubDate`, keeping the wall clock time of its own offset
pub fn parse_pub_date(buf: &str) -> Result<NaiveDateTime, String> {
    match DateTime::parse_from_rfc2822(buf.trim()) {
        Ok(dt) => Ok(dt.naive_local()),
        Err(e) => Err(format!("Unable to parse date {}: {}", buf, e)),
    }
}

/// Publish date with fallback to the creation date when the former has no usable year
pub fn resolve_date(pub_date: &str, post_date: &str) -> Option<NaiveDateTime> {
    match parse_pub_date(pub_date) {
        Ok(dt) if dt.year() > 0 => Some(dt),
        _ => parse_date_time(post_date).ok().filter(|dt| dt.year() > 0),
    }
}

pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// `https://host.tld/wp-content/uploads/a.png` becomes `/uploads/a.png`, everywhere in `text`
pub fn strip_media_origin(text: &str) -> String {
    MEDIA_REGEX.replace_all(text, "").to_string()
}

/// Same as [`strip_media_origin`], first occurrence only
pub fn strip_first_media_origin(text: &str) -> String {
    MEDIA_REGEX.replace(text, "").to_string()
}

/// Removes the scheme and host from the first absolute URL found
pub fn strip_origin(url: &str) -> String {
    ORIGIN_REGEX.replace(url, "").to_string()
}

pub fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").to_string()
}
