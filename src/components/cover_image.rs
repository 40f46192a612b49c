//! Cover `<img>` with GitHub URL normalization and a fallback image.

use leptos::prelude::*;

use crate::util::cover::{FALLBACK_COVER, get_cover_url};

#[component]
pub fn CoverImage(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let url = get_cover_url(Some(&src));
    let url = if url.is_empty() { FALLBACK_COVER.to_owned() } else { url };

    view! {
        <img
            class="cover-image"
            src=url
            alt=alt
            loading="lazy"
            on:error=move |ev| {
                #[cfg(feature = "csr")]
                crate::util::cover::on_img_error(&ev);
                #[cfg(not(feature = "csr"))]
                let _ = ev;
            }
        />
    }
}
