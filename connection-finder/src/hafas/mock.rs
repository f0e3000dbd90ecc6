//! Scripted connection source for testing without the upstream.
//!
//! Serves canned result pages in order and records every submitted form.
//! The page builders produce markup in the shape of the live result page.

use std::collections::VecDeque;
use std::fmt::Write;

use tokio::sync::Mutex;

use super::ConnectionSource;
use super::error::HafasError;

/// A source that replays a fixed list of responses.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<Vec<(String, String)>>>,
}

impl ScriptedSource {
    /// Create a source answering with `pages`, one per search.
    pub fn new(pages: impl IntoIterator<Item = String>) -> Self {
        Self {
            responses: Mutex::new(pages.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Forms submitted so far, oldest first.
    pub async fn requests(&self) -> Vec<Vec<(String, String)>> {
        self.requests.lock().await.clone()
    }
}

impl ConnectionSource for ScriptedSource {
    async fn search(&self, form: &[(String, String)]) -> Result<String, HafasError> {
        self.requests.lock().await.push(form.to_vec());
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| HafasError::Status {
                status: 404,
                body: "no scripted response left".to_string(),
            })
    }
}

/// Value of `key` in a submitted form.
pub fn form_value<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// A result page listing `rows` of
/// `[start, destination, departure, arrival, duration, product]`.
pub fn result_page(rows: &[[&str; 6]]) -> String {
    let mut body = String::from(
        "<html><body><form>\n<div id=\"errormsg_time\"></div>\n</form>\n\
         <div id=\"resultsOverview\"><table>\n",
    );
    for [start, destination, departure, arrival, duration, product] in rows {
        let _ = write!(
            body,
            "<tbody class=\"boxShadow\">\
             <tr class=\"firstrow\">\
             <td class=\"station first\">{start}</td>\
             <td class=\"time\">{departure}</td>\
             <td class=\"duration lastrow\" rowspan=\"2\">{duration}</td>\
             <td class=\"products lastrow\" rowspan=\"2\">{product}</td>\
             </tr>\
             <tr class=\"last\">\
             <td class=\"station stationDest\">{destination}</td>\
             <td class=\"time\">{arrival}</td>\
             </tr></tbody>\n"
        );
    }
    body.push_str("</table></div></body></html>\n");
    body
}

/// An error region on a rejected search form.
#[derive(Debug, Clone, Copy)]
pub enum PageError<'a> {
    Start {
        message: &'a str,
        candidates: &'a [&'a str],
    },
    Destination {
        message: &'a str,
        candidates: &'a [&'a str],
    },
    Date(&'a str),
    Time(&'a str),
}

/// The search form sent back with the given error regions filled in.
///
/// Without a [`PageError::Time`] entry the time region is still present,
/// but empty, as on the live page.
pub fn error_page(errors: &[PageError<'_>]) -> String {
    let mut body = String::from("<html><body><form>\n");
    let mut has_time = false;
    for error in errors {
        match error {
            PageError::Start {
                message,
                candidates,
            } => station_error(&mut body, "S", message, candidates),
            PageError::Destination {
                message,
                candidates,
            } => station_error(&mut body, "Z", message, candidates),
            PageError::Date(message) => {
                let _ = writeln!(body, "<div id=\"errormsg_date\">{message}</div>");
            }
            PageError::Time(message) => {
                has_time = true;
                let _ = writeln!(body, "<div id=\"errormsg_time\">{message}</div>");
            }
        }
    }
    if !has_time {
        body.push_str("<div id=\"errormsg_time\"></div>\n");
    }
    body.push_str("</form></body></html>\n");
    body
}

fn station_error(body: &mut String, field: &str, message: &str, candidates: &[&str]) {
    let _ = writeln!(body, "<div id=\"errormsg_{field}\">{message}</div>");
    let _ = write!(
        body,
        "<select id=\"REQ0JourneyStops{field}0K\" name=\"REQ0JourneyStops{field}0K\">"
    );
    for candidate in candidates {
        let _ = write!(body, "<option>{candidate}</option>");
    }
    body.push_str("</select>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order() {
        let source = ScriptedSource::new(["one".to_string(), "two".to_string()]);
        let form = vec![("k".to_string(), "v".to_string())];

        assert_eq!(source.search(&form).await.unwrap(), "one");
        assert_eq!(source.search(&form).await.unwrap(), "two");
        assert!(source.search(&form).await.is_err());
        assert_eq!(source.requests().await.len(), 3);
    }

    #[test]
    fn form_value_lookup() {
        let form = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ];
        assert_eq!(form_value(&form, "b"), Some("2"));
        assert_eq!(form_value(&form, "c"), None);
    }
}
