use chrono::NaiveDate;

use crate::models::{JobPost, SiteSettings};
use crate::seo::escape_markup;

/// Renders the sitemap: home URL, optionally the latest-jobs category, and one
/// URL per stored post, all stamped with `today`.
pub fn generate_sitemap_xml(posts: &[JobPost], settings: &SiteSettings, today: NaiveDate) -> String {
    let base_url = settings.general.site_base_url.trim_end_matches('/');
    let today = today.format("%Y-%m-%d").to_string();

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
    );
    push_url(&mut xml, &format!("{base_url}/"), &today, "daily", "1.0");

    if settings.sitemap.include_categories {
        push_url(
            &mut xml,
            &format!("{base_url}/category/latest-jobs"),
            &today,
            "hourly",
            "0.9",
        );
    }

    for post in posts {
        push_url(
            &mut xml,
            &format!("{base_url}/#/post/{}", post.id),
            &today,
            "daily",
            "0.8",
        );
    }

    xml.push_str("\n</urlset>");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    xml.push_str(&format!(
        "\n  <url>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>",
        escape_markup(loc)
    ));
}
