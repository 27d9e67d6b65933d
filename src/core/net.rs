// src/core/net.rs

// Blocking HTTPS GET. The site serves stat tables late and behind
// redirects, so there is a bounded refetch helper below.

use std::{thread, time::Duration};

use crate::config::consts::{HOST, POLL_ATTEMPTS, POLL_PAUSE_MS, USER_AGENT};
use crate::core::html;

pub fn http_get(path_and_query: &str) -> Result<String, Box<dyn std::error::Error>> {
    let url = format!("https://{}{}", HOST, path_and_query);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(15))
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()?;

    let resp = client.get(&url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}

/// Fetch `path` until `marker` appears in the body (case-insensitive).
///
/// The dynamic parts of a report page can be missing from early responses;
/// this is the "wait for the element" step, without a browser. Gives up
/// after POLL_ATTEMPTS.
pub fn fetch_until(path: &str, marker: &str) -> Result<String, Box<dyn std::error::Error>> {
    let marker_lc = html::to_lower(marker);

    for attempt in 1..=POLL_ATTEMPTS {
        let body = http_get(path)?;
        if html::to_lower(&body).contains(&marker_lc) {
            return Ok(body);
        }
        logd!(
            "Net: '{}' absent from {} (attempt {}/{}, {} bytes)",
            marker, path, attempt, POLL_ATTEMPTS, body.len()
        );
        if attempt < POLL_ATTEMPTS {
            thread::sleep(Duration::from_millis(POLL_PAUSE_MS));
        }
    }
    Err(format!("{}: '{}' never appeared after {} attempts", path, marker, POLL_ATTEMPTS).into())
}
