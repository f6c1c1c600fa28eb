use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::TransportError;

/// Build an HTTP client identifying itself with `user_agent`.
///
/// No timeout is set; the transport default applies.
pub fn client(user_agent: &str) -> Result<Client, TransportError> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// Issue a GET and decode the JSON body. Any non-success status fails without decoding.
pub async fn get_json<T>(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, TransportError>
where
    T: DeserializeOwned,
{
    let res = http.get(url).query(query).send().await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(TransportError::Status {
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(truncate_body("Bad Request"), "Bad Request");
    }

    #[test]
    fn long_bodies_are_cut() {
        let body = "x".repeat(500);
        let cut = truncate_body(&body);
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Byte 200 falls inside a two-byte character.
        let body = format!("a{}", "é".repeat(150));
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), 202);
    }
}
