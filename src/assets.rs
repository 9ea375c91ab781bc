use instant::Instant;
use irc_core::{AssetInfo, AssetKind, LoadProgress, LoadReporter, ViewerError};
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn fetch_error(url: &str, e: impl std::fmt::Debug) -> ViewerError {
    ViewerError::AssetFetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    }
}

/// Fetch `url` and return its body.
///
/// Progress and the final outcome go to `reporter`; the error is also returned
/// so the caller can decide how to degrade.
pub async fn fetch_bytes(
    url: &str,
    kind: AssetKind,
    reporter: &mut dyn LoadReporter,
) -> Result<Vec<u8>, ViewerError> {
    let result = fetch_inner(url, kind, reporter).await;
    if let Err(e) = &result {
        reporter.failed(url, e);
    }
    result
}

async fn fetch_inner(
    url: &str,
    kind: AssetKind,
    reporter: &mut dyn LoadReporter,
) -> Result<Vec<u8>, ViewerError> {
    let started = Instant::now();
    let window = web::window().ok_or_else(|| fetch_error(url, "no window"))?;

    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request = web::Request::new_with_str_and_init(url, &opts).map_err(|e| fetch_error(url, e))?;

    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_error(url, e))?
        .dyn_into()
        .map_err(|e| fetch_error(url, e))?;
    if !response.ok() {
        return Err(ViewerError::AssetStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let total = response
        .headers()
        .get("content-length")
        .ok()
        .flatten()
        .and_then(|v| v.parse::<u64>().ok());
    reporter.progress(url, LoadProgress { loaded: 0, total });

    let buffer = JsFuture::from(response.array_buffer().map_err(|e| fetch_error(url, e))?)
        .await
        .map_err(|e| fetch_error(url, e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    reporter.progress(
        url,
        LoadProgress {
            loaded: bytes.len() as u64,
            total: total.or(Some(bytes.len() as u64)),
        },
    );
    reporter.loaded(&AssetInfo {
        kind,
        url: url.to_string(),
        bytes: bytes.len(),
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    });
    Ok(bytes)
}

pub async fn fetch_text(
    url: &str,
    kind: AssetKind,
    reporter: &mut dyn LoadReporter,
) -> Result<String, ViewerError> {
    let bytes = fetch_bytes(url, kind, reporter).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
