//! Blog-list REST API source
//!
//! Fetches `GET {base}/api/blogs`, which returns the stored blogs with their
//! owning user populated.

use std::time::Duration;

use crate::error::LoadError;
use crate::source::{Fetched, Source, blogs_from_values};

const BLOGS_PATH: &str = "/api/blogs";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) struct ApiSource {
    endpoint: String,
    token: Option<String>,
}

impl ApiSource {
    pub(crate) fn new(base_url: &str, token: Option<String>) -> Self {
        ApiSource {
            endpoint: blogs_endpoint(base_url),
            token,
        }
    }
}

/// Accept either the server root or the full blogs endpoint
fn blogs_endpoint(base_url: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    if base.ends_with(BLOGS_PATH) {
        base.to_string()
    } else {
        format!("{base}{BLOGS_PATH}")
    }
}

impl Source for ApiSource {
    fn display_name(&self) -> String {
        self.endpoint.clone()
    }

    fn fetch(&self) -> Result<Fetched, LoadError> {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();

        let mut request = agent.get(&self.endpoint).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        tracing::debug!("GET {}", self.endpoint);
        let response = request.call().map_err(|e| LoadError::Http {
            url: self.endpoint.clone(),
            message: e.to_string(),
        })?;

        let mut body = response.into_body();
        let values: Vec<serde_json::Value> =
            serde_json::from_reader(body.as_reader()).map_err(|source| LoadError::Response {
                url: self.endpoint.clone(),
                source,
            })?;

        let (blogs, skipped) = blogs_from_values(values);
        Ok(Fetched {
            blogs,
            skipped,
            inputs: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single canned HTTP response and hand back the raw request
    fn serve_once(status: &str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn endpoint_from_root_or_full_path() {
        assert_eq!(
            blogs_endpoint("http://localhost:3003"),
            "http://localhost:3003/api/blogs"
        );
        assert_eq!(
            blogs_endpoint("http://localhost:3003/"),
            "http://localhost:3003/api/blogs"
        );
        assert_eq!(
            blogs_endpoint("http://localhost:3003/api/blogs/"),
            "http://localhost:3003/api/blogs"
        );
    }

    #[test]
    fn fetch_reads_populated_blogs() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"title":"t","author":"A","url":"u","likes":3,"user":[{"username":"root","name":"Super","id":"u1"}],"id":"b1"},{"author":"B"}]"#,
        );
        let source = ApiSource::new(&url, Some("secret".to_string()));
        let fetched = source.fetch().unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("GET /api/blogs "));
        assert!(request.contains("Bearer secret"));
        assert_eq!(fetched.blogs.len(), 2);
        assert_eq!(fetched.blogs[0].username(), Some("root"));
        assert_eq!(fetched.blogs[1].likes, 0);
        assert_eq!(fetched.skipped, 0);
    }

    #[test]
    fn fetch_error_status_is_http_error() {
        let (url, server) = serve_once("401 Unauthorized", r#"{"error":"token invalid"}"#);
        let result = ApiSource::new(&url, None).fetch();
        let _ = server.join();
        assert!(matches!(result, Err(LoadError::Http { .. })));
    }

    #[test]
    fn fetch_non_array_body_is_response_error() {
        let (url, server) = serve_once("200 OK", r#"{"error":"nope"}"#);
        let result = ApiSource::new(&url, None).fetch();
        let _ = server.join();
        assert!(matches!(result, Err(LoadError::Response { .. })));
    }
}
