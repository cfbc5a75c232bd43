//! HTTP fetcher for section partials
//!
//! Uses web-sys fetch for WASM, reqwest for native.

use async_trait::async_trait;
use gradreport_core::{FetchResponse, Fetcher};

#[derive(Clone, Default)]
pub struct HttpFetcher {
    /// Prefix for relative paths; empty resolves against the page URL
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), path)
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn get_text(&self, path: &str) -> Result<FetchResponse, String> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let url = self.url_for(path);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| format!("request error: {:?}", e))?;

        let window = web_sys::window().ok_or("no window")?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("fetch error: {:?}", e))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| "response is not a Response")?;

        let status = resp.status();
        if !resp.ok() {
            return Ok(FetchResponse {
                status,
                body: String::new(),
            });
        }

        let text = JsFuture::from(
            resp.text()
                .map_err(|e| format!("text promise error: {:?}", e))?,
        )
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

        Ok(FetchResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn get_text(&self, path: &str) -> Result<FetchResponse, String> {
        let url = self.url_for(path);

        let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(FetchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        assert_eq!(
            HttpFetcher::default().url_for("sections/s1-overview.html"),
            "sections/s1-overview.html"
        );
        assert_eq!(
            HttpFetcher::new("http://localhost:8000/").url_for("sections/s2-pipeline.html"),
            "http://localhost:8000/sections/s2-pipeline.html"
        );
    }
}
