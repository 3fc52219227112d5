//! Declarative document-head model.
//!
//! `HeadState::resolve` computes the desired head from settings and the current
//! page; `render_head` is the single place that turns it into markup.

use serde::Serialize;

use crate::models::{JobPost, SiteSettings};
use crate::seo::escape_markup;

const DEFAULT_KEYWORDS: &str = "Sarkari Result, Government Jobs";

/// Page-level metadata supplied by whatever is being viewed.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub schema: Option<String>,
}

impl PageMeta {
    /// SEO fields of a post, falling back to its title and short description.
    pub fn for_post(post: &JobPost) -> Self {
        let seo = &post.seo;
        Self {
            title: non_empty(seo.seo_title.as_deref()).or_else(|| non_empty(Some(&post.title))),
            description: non_empty(seo.seo_description.as_deref())
                .or_else(|| non_empty(Some(&post.short_description))),
            keywords: non_empty(seo.keywords.as_deref()),
            schema: if post.enable_schema {
                non_empty(post.schema_markup.as_deref())
            } else {
                None
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeadState {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub robots: String,
    pub theme_color: String,
    pub site_verification: Option<String>,
    pub analytics_id: Option<String>,
    pub schema_json: Option<String>,
}

impl HeadState {
    pub fn resolve(settings: &SiteSettings, page: &PageMeta, path: &str) -> Self {
        let general = &settings.general;

        let title = match non_empty(page.title.as_deref()) {
            Some(t) => format!("{t} | {}", general.site_name),
            None => format!("{} - {}", general.site_name, general.tagline),
        };

        let description = non_empty(page.description.as_deref())
            .or_else(|| non_empty(Some(&settings.mobile_seo.mobile_meta_desc)))
            .unwrap_or_else(|| general.tagline.clone());

        let keywords =
            non_empty(page.keywords.as_deref()).unwrap_or_else(|| DEFAULT_KEYWORDS.to_string());

        let no_index = path.contains("/category/") && settings.indexing.noindex_categories;

        Self {
            title,
            description,
            keywords,
            canonical: format!("{}/#{}", general.site_base_url, path),
            robots: if no_index { "noindex, follow" } else { "index, follow" }.to_string(),
            theme_color: settings.mobile_seo.theme_color.clone(),
            site_verification: non_empty(Some(&settings.google.search_console_code)),
            analytics_id: non_empty(Some(&settings.google.analytics_id)),
            schema_json: page.schema.clone(),
        }
    }
}

/// Renders the head tags in a fixed order.
pub fn render_head(head: &HeadState) -> String {
    let mut tags = vec![
        format!("<title>{}</title>", escape_markup(&head.title)),
        meta("description", &head.description),
        meta("keywords", &head.keywords),
        format!(
            "<link rel=\"canonical\" href=\"{}\">",
            escape_markup(&head.canonical)
        ),
    ];

    if let Some(code) = &head.site_verification {
        tags.push(meta("google-site-verification", code));
    }

    if let Some(id) = &head.analytics_id {
        let id = escape_markup(id);
        tags.push(format!(
            "<script id=\"ga-script\" async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>"
        ));
        tags.push(format!(
            "<script id=\"ga-init\">window.dataLayer = window.dataLayer || [];function gtag(){{dataLayer.push(arguments);}}gtag('js', new Date());gtag('config', '{id}');</script>"
        ));
    }

    tags.push(meta("robots", &head.robots));
    tags.push(meta("theme-color", &head.theme_color));

    if let Some(schema) = &head.schema_json {
        // A literal "</" would close the script element early.
        tags.push(format!(
            "<script id=\"schema-markup\" type=\"application/ld+json\">{}</script>",
            schema.replace("</", "<\\/")
        ));
    }

    tags.join("\n")
}

fn meta(name: &str, content: &str) -> String {
    format!(
        "<meta name=\"{name}\" content=\"{}\">",
        escape_markup(content)
    )
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
