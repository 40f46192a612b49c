//! Featured template gallery with covers and preview links.

use leptos::prelude::*;

use crate::components::cover_image::CoverImage;
use crate::config::AppConfig;
use crate::util::preview_path::{CodeGenType, get_preview_path};

struct FeaturedTemplate {
    name: &'static str,
    cover: &'static str,
    code_gen_type: CodeGenType,
    app_id: &'static str,
}

const FEATURED: [FeaturedTemplate; 3] = [
    FeaturedTemplate {
        name: "Personal blog",
        cover: "https://github.com/appforge-dev/templates/blob/main/covers/blog.png",
        code_gen_type: CodeGenType::Html,
        app_id: "1",
    },
    FeaturedTemplate {
        name: "Product landing page",
        cover: "https://github.com/appforge-dev/templates/blob/main/covers/landing.png",
        code_gen_type: CodeGenType::MultiFile,
        app_id: "2",
    },
    FeaturedTemplate {
        name: "Task board",
        cover: "https://github.com/appforge-dev/templates/blob/main/covers/tasks.png",
        code_gen_type: CodeGenType::VueProject,
        app_id: "3",
    },
];

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <section class="templates">
            <h1>"Templates"</h1>
            <div class="templates__grid">
                {FEATURED
                    .iter()
                    .map(|template| {
                        let preview = get_preview_path(
                            Some(template.code_gen_type.as_str()),
                            template.app_id,
                            &config.preview_domain,
                        );
                        view! {
                            <article class="template-card">
                                <CoverImage src=template.cover alt=template.name/>
                                <h2>{template.name}</h2>
                                <span class="template-card__kind">{template.code_gen_type.label()}</span>
                                <a class="template-card__preview" href=preview target="_blank" rel="noopener">
                                    "Preview"
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
