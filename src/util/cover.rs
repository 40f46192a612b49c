//! Cover-image URL normalization.
//!
//! Users paste GitHub page links as cover images; those serve HTML, not the
//! image. `/blob/` links are rewritten to `raw.githubusercontent.com`, other
//! GitHub links get a `raw=1` query parameter.

#[cfg(test)]
#[path = "cover_test.rs"]
mod cover_test;

/// Image shown when a cover fails to load.
pub const FALLBACK_COVER: &str = "/logo.png";

const GITHUB_HOST: &str = "github.com";
const RAW_HOST: &str = "raw.githubusercontent.com";

/// Normalize a cover URL for use as an `<img src>`.
pub fn get_cover_url(url: Option<&str>) -> String {
    let Some(url) = url else {
        return String::new();
    };
    let url = url.trim();
    if !url.contains(GITHUB_HOST) || url.contains(RAW_HOST) {
        return url.to_owned();
    }
    if url.contains("/blob/") {
        return url
            .replacen("https://github.com/", "https://raw.githubusercontent.com/", 1)
            .replacen("http://github.com/", "https://raw.githubusercontent.com/", 1)
            .replacen("/blob/", "/", 1);
    }
    if has_raw_param(url) {
        return url.to_owned();
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}raw=1")
}

/// True when a `raw=1` query parameter is present as a whole value.
fn has_raw_param(url: &str) -> bool {
    url.match_indices("raw=1").any(|(idx, m)| {
        let preceded = url[..idx].ends_with(['?', '&']);
        let bounded = url[idx + m.len()..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'));
        preceded && bounded
    })
}

/// Source to swap in after an image error, or `None` if the fallback
/// itself is what failed.
pub fn fallback_src(current: &str) -> Option<&'static str> {
    if current.ends_with(FALLBACK_COVER) { None } else { Some(FALLBACK_COVER) }
}

/// `error` handler for cover `<img>` elements.
#[cfg(feature = "csr")]
pub fn on_img_error(ev: &web_sys::Event) {
    use wasm_bindgen::JsCast;

    let Some(img) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    if let Some(src) = fallback_src(&img.src()) {
        img.set_src(src);
    }
}
