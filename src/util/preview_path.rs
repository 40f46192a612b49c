//! Preview URLs for generated apps.

#[cfg(test)]
#[path = "preview_path_test.rs"]
mod preview_path_test;

use serde::{Deserialize, Serialize};

/// Kind of project the generator produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeGenType {
    /// Single HTML file.
    Html,
    /// Plain HTML/CSS/JS files.
    MultiFile,
    /// Vue project; previews are served from its `dist/` build output.
    VueProject,
}

impl CodeGenType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::MultiFile => "multi_file",
            Self::VueProject => "vue_project",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "Native HTML",
            Self::MultiFile => "Multi-file",
            Self::VueProject => "Vue project",
        }
    }
}

/// Build the preview URL for an app: `{domain}/static/{type}_{app_id}/`,
/// with `dist/` appended for Vue projects.
///
/// Returns an empty string when either the type or the id is missing.
pub fn get_preview_path(code_gen_type: Option<&str>, app_id: &str, preview_domain: &str) -> String {
    let Some(code_gen_type) = code_gen_type.filter(|t| !t.is_empty()) else {
        return String::new();
    };
    if app_id.is_empty() {
        return String::new();
    }
    let base = preview_domain.strip_suffix('/').unwrap_or(preview_domain);
    let base_path = format!("{base}/static/{code_gen_type}_{app_id}");
    if code_gen_type == CodeGenType::VueProject.as_str() {
        format!("{base_path}/dist/")
    } else {
        format!("{base_path}/")
    }
}
