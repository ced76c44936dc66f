//! URL-safe share token codec for course snapshots.
//!
//! A share token is the JSON of a versioned payload, encoded as padding-free
//! URL-safe base64 so it survives as a single query parameter value while
//! preserving arbitrary Unicode in place ids and notes. Version 2 wraps the
//! whole course; version 1 is the legacy single-day `{lang, items}` shape and
//! is upgraded on decode.
//!
//! Encoding and decoding are pure transforms; switching the store into
//! shared read-only mode around them is the planner's job
//! ([`crate::planner`]).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PlannerError, Result};
use crate::models::{today, Course, ItineraryItem, Language};

/// Query parameter carrying the share token on a share URL.
pub const SHARE_PARAM: &str = "course";

/// Wire version written by [`encode`].
const SHARE_VERSION: u32 = 2;

/// A successfully decoded share snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedShare {
    /// The reconstituted course, days normalized to its date range
    pub course: Course,
    /// The language the course was shared in
    pub language: Language,
}

#[derive(Serialize)]
struct SharePayload<'a> {
    v: u32,
    course: &'a Course,
}

/// The raw payload shape, accepted loosely and resolved into one of the two
/// protocol versions right here.
#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    v: u32,
    #[serde(default)]
    lang: Option<String>,
    #[serde(default)]
    items: Option<Vec<RawShareItem>>,
    #[serde(default)]
    course: Option<Course>,
}

#[derive(Deserialize)]
struct RawShareItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    time: String,
}

/// Encodes a course into a URL-safe share token tagged with the language it
/// is being shared in.
pub fn encode(course: &Course, language: Language) -> Result<String> {
    let mut snapshot = course.clone();
    snapshot.meta.language = language;
    let payload = SharePayload {
        v: SHARE_VERSION,
        course: &snapshot,
    };
    let json = serde_json::to_string(&payload)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decodes a share token back into a course snapshot.
///
/// Legacy `v:1` payloads become a single-day course dated today holding the
/// payload items in order. Current payloads have their day buckets rebuilt to
/// match the encoded date range, carrying places by day index, so a decoded
/// course always satisfies the range/bucket invariant.
pub fn decode(token: &str) -> Result<DecodedShare> {
    let token = token.trim().trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| PlannerError::share_token(format!("not base64url: {e}")))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| PlannerError::share_token(format!("not UTF-8: {e}")))?;
    let payload: RawPayload = serde_json::from_str(&json)
        .map_err(|e| PlannerError::share_token(format!("not a share payload: {e}")))?;

    if payload.v == 1 {
        let language = Language::normalize(payload.lang.as_deref());
        let mut course = Course::single_day(today(), language);
        course.days[0].places = payload
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| {
                let id = raw.id.trim();
                if id.is_empty() {
                    return None;
                }
                let mut item = ItineraryItem::new(id);
                item.time = raw.time;
                Some(item)
            })
            .collect();
        return Ok(DecodedShare { course, language });
    }

    let Some(mut course) = payload.course else {
        return Err(PlannerError::share_token("missing course"));
    };
    course.rebuild_days()?;
    let language = course.meta.language;
    Ok(DecodedShare { course, language })
}

/// Builds a share URL by setting the token as the share query parameter on a
/// base URL, replacing any token already present.
pub fn share_url(base: &str, token: &str) -> Result<String> {
    let mut url = Url::parse(base).map_err(|e| {
        PlannerError::invalid_input("base_url", format!("Invalid base URL: {e}"))
    })?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SHARE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(SHARE_PARAM, token);
    }
    Ok(url.into())
}

/// Extracts a share token from a pasted share URL. Returns `None` when the
/// input is not a URL or carries no token, letting callers fall back to
/// treating the input as a bare token.
pub fn token_from_url(input: &str) -> Option<String> {
    let url = Url::parse(input.trim()).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn sample_course() -> Course {
        let mut course = Course::single_day(date(2026, 3, 1), Language::Ko);
        course
            .set_trip_dates(date(2026, 3, 1), date(2026, 3, 2))
            .expect("Failed to set dates");
        course.toggle_place("경복궁", 1);
        course.set_time(1, "경복궁", "09:30");
        course.toggle_place("bukchon", 2);
        course
    }

    #[test]
    fn test_roundtrip_preserves_content_and_language() {
        let course = sample_course();
        let token = encode(&course, Language::En).expect("Failed to encode");

        // Token must be a single URL-safe query value.
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let decoded = decode(&token).expect("Failed to decode");
        assert_eq!(decoded.language, Language::En);
        assert_eq!(decoded.course.start_date, course.start_date);
        assert_eq!(decoded.course.end_date, course.end_date);
        assert_eq!(decoded.course.days.len(), 2);
        assert_eq!(decoded.course.days[0].places, course.days[0].places);
        assert_eq!(decoded.course.days[1].places, course.days[1].places);
    }

    #[test]
    fn test_decode_accepts_padded_tokens() {
        let token = encode(&sample_course(), Language::Ko).expect("Failed to encode");
        let padded = format!("{token}==");
        assert!(decode(&padded).is_ok());
    }

    #[test]
    fn test_decode_legacy_v1_payload() {
        let json = r#"{"v":1,"lang":"en","items":[{"id":"a","time":"09:00"},{"id":"b","time":""},{"id":"  "}]}"#;
        let token = URL_SAFE_NO_PAD.encode(json.as_bytes());

        let decoded = decode(&token).expect("Failed to decode v1 payload");
        assert_eq!(decoded.language, Language::En);
        assert_eq!(decoded.course.days.len(), 1);
        assert_eq!(decoded.course.start_date, today());

        let places = &decoded.course.days[0].places;
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].place_id, "a");
        assert_eq!(places[0].time, "09:00");
        assert_eq!(places[1].place_id, "b");
        assert_eq!(places[1].time, "");
    }

    #[test]
    fn test_decode_normalizes_days_to_date_range() {
        // A payload claiming three days of range but carrying only day 2.
        let json = r#"{"v":2,"course":{
            "startDate":"2026-03-01","endDate":"2026-03-03",
            "days":[{"dayIndex":2,"date":"2026-03-02","places":[{"id":"a"}]}],
            "meta":{"lang":"jp"}
        }}"#;
        let token = URL_SAFE_NO_PAD.encode(json.as_bytes());

        let decoded = decode(&token).expect("Failed to decode");
        assert_eq!(decoded.language, Language::Jp);
        assert_eq!(decoded.course.days.len(), 3);
        assert!(decoded.course.days[0].places.is_empty());
        assert_eq!(decoded.course.days[1].places[0].place_id, "a");
        assert_eq!(decoded.course.days[2].date, date(2026, 3, 3));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not!!base64").is_err());
        assert!(decode(&URL_SAFE_NO_PAD.encode(b"\xff\xfe")).is_err());
        assert!(decode(&URL_SAFE_NO_PAD.encode(b"{\"v\":2}")).is_err());
        assert!(decode(&URL_SAFE_NO_PAD.encode(b"[1,2,3]")).is_err());
    }

    #[test]
    fn test_share_url_sets_and_replaces_token() {
        let url = share_url("https://example.com/trip?x=1", "tok-a").expect("Failed to build URL");
        assert_eq!(url, "https://example.com/trip?x=1&course=tok-a");

        let url = share_url(&url, "tok-b").expect("Failed to rebuild URL");
        assert_eq!(url, "https://example.com/trip?x=1&course=tok-b");
    }

    #[test]
    fn test_token_from_url() {
        assert_eq!(
            token_from_url("https://example.com/trip?course=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(token_from_url("https://example.com/trip"), None);
        assert_eq!(token_from_url("abc123"), None);
    }
}
