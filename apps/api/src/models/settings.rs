//! Site settings document.
//!
//! Every section carries `#[serde(default)]`, so a stored document that lacks a
//! section or a field is merged over the defaults on read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    pub general: GeneralSettings,
    pub mobile_home: MobileHomeSettings,
    pub sitemap: SitemapSettings,
    pub google: GoogleSettings,
    pub ads: AdSettings,
    pub mobile_seo: MobileSeoSettings,
    pub robots: RobotsSettings,
    pub indexing: IndexingSettings,
    pub schema: SchemaSettings,
    pub social: SocialSettings,
    pub quick_links: Vec<QuickLink>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            mobile_home: MobileHomeSettings::default(),
            sitemap: SitemapSettings::default(),
            google: GoogleSettings::default(),
            ads: AdSettings::default(),
            mobile_seo: MobileSeoSettings::default(),
            robots: RobotsSettings::default(),
            indexing: IndexingSettings::default(),
            schema: SchemaSettings::default(),
            social: SocialSettings::default(),
            quick_links: default_quick_links(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub site_name: String,
    pub site_base_url: String,
    pub tagline: String,
    pub footer_text: String,
    pub contact_email: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            site_name: "SarkariAI".to_string(),
            site_base_url: "https://sarkariai.com".to_string(),
            tagline: "India No.1 Job Portal".to_string(),
            footer_text: "Copyright 2025 SarkariAI".to_string(),
            contact_email: "support@sarkariai.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HomeLayout {
    List,
    #[default]
    Grid,
    Card,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisibleSections {
    pub latest_jobs: bool,
    pub results: bool,
    pub admit_cards: bool,
    pub trending: bool,
}

impl Default for VisibleSections {
    fn default() -> Self {
        Self {
            latest_jobs: true,
            results: true,
            admit_cards: true,
            trending: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MobileHomeSettings {
    pub enabled: bool,
    pub mobile_title: String,
    pub layout: HomeLayout,
    pub visible_sections: VisibleSections,
    pub post_limit: u32,
    pub banner_url: String,
}

impl Default for MobileHomeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mobile_title: "SarkariAI Mobile".to_string(),
            layout: HomeLayout::Grid,
            visible_sections: VisibleSections::default(),
            post_limit: 10,
            banner_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SitemapSettings {
    pub auto_generate: bool,
    pub sitemap_url: String,
    pub include_categories: bool,
    pub include_pages: bool,
    /// Comma separated.
    pub exclude_urls: String,
}

impl Default for SitemapSettings {
    fn default() -> Self {
        Self {
            auto_generate: true,
            sitemap_url: "https://sarkariai.com/sitemap.xml".to_string(),
            include_categories: true,
            include_pages: true,
            exclude_urls: "/admin,/private".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GoogleSettings {
    pub search_console_code: String,
    pub analytics_id: String,
    pub tag_manager_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdSettings {
    pub global_head_code: String,
    pub global_body_code: String,
    pub header_slot: String,
    pub footer_slot: String,
    pub sidebar_slot: String,
    pub in_post_slot: String,
    pub show_on_mobile: bool,
    pub show_on_desktop: bool,
}

impl Default for AdSettings {
    fn default() -> Self {
        Self {
            global_head_code: String::new(),
            global_body_code: String::new(),
            header_slot: String::new(),
            footer_slot: String::new(),
            sidebar_slot: String::new(),
            in_post_slot: String::new(),
            show_on_mobile: true,
            show_on_desktop: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MobileSeoSettings {
    pub mobile_meta_title: String,
    pub mobile_meta_desc: String,
    pub enable_amp: bool,
    pub enable_lazy_load: bool,
    pub minify_css_js: bool,
    pub theme_color: String,
}

impl Default for MobileSeoSettings {
    fn default() -> Self {
        Self {
            mobile_meta_title: "SarkariAI - Fast Updates".to_string(),
            mobile_meta_desc: "Get fastest government job updates on mobile.".to_string(),
            enable_amp: false,
            enable_lazy_load: true,
            minify_css_js: true,
            theme_color: "#4f46e5".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RobotsSettings {
    pub content: String,
    pub custom_rules: String,
}

impl Default for RobotsSettings {
    fn default() -> Self {
        Self {
            content: "User-agent: *\nDisallow: /admin\nAllow: /".to_string(),
            custom_rules: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndexingSettings {
    pub noindex_categories: bool,
    pub noindex_tags: bool,
    pub noindex_search: bool,
    pub noindex_pagination: bool,
    pub external_links_nofollow: bool,
}

impl Default for IndexingSettings {
    fn default() -> Self {
        Self {
            noindex_categories: false,
            noindex_tags: true,
            noindex_search: true,
            noindex_pagination: true,
            external_links_nofollow: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchemaSettings {
    pub enable_organization: bool,
    pub enable_job_posting: bool,
    pub enable_auto_faq: bool,
    pub enable_breadcrumbs: bool,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            enable_organization: true,
            enable_job_posting: true,
            enable_auto_faq: true,
            enable_breadcrumbs: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialSettings {
    pub default_og_image: String,
    pub facebook_page: String,
    pub whatsapp_group: String,
    pub twitter_handle: String,
    pub telegram_channel: String,
    pub youtube_channel: String,
}

impl Default for SocialSettings {
    fn default() -> Self {
        Self {
            default_og_image: String::new(),
            facebook_page: String::new(),
            whatsapp_group: "https://chat.whatsapp.com/sample".to_string(),
            twitter_handle: String::new(),
            telegram_channel: "https://t.me/sample".to_string(),
            youtube_channel: String::new(),
        }
    }
}

/// How a quick link opens: in a new tab or inside an embedded frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuickLinkKind {
    Iframe,
    Redirect,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuickLinkCategory {
    #[serde(rename = "Admit Card")]
    AdmitCard,
    Result,
    #[serde(rename = "Official Site")]
    OfficialSite,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickLink {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: QuickLinkKind,
    pub category: QuickLinkCategory,
    pub is_active: bool,
}

fn default_quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink {
            id: "1".to_string(),
            title: "Check SSC Result".to_string(),
            url: "https://ssc.nic.in".to_string(),
            kind: QuickLinkKind::Redirect,
            category: QuickLinkCategory::Result,
            is_active: true,
        },
        QuickLink {
            id: "2".to_string(),
            title: "Download Admit Card".to_string(),
            url: "#".to_string(),
            kind: QuickLinkKind::Iframe,
            category: QuickLinkCategory::AdmitCard,
            is_active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings: SiteSettings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(settings, SiteSettings::default());
        assert_eq!(settings.quick_links.len(), 2);
    }

    #[test]
    fn test_partial_section_merges_over_defaults() {
        let stored = json!({
            "general": { "site_name": "MyJobs" },
            "mobile_seo": { "theme_color": "#000000" }
        });
        let settings: SiteSettings = serde_json::from_value(stored).unwrap();
        assert_eq!(settings.general.site_name, "MyJobs");
        assert_eq!(settings.general.tagline, "India No.1 Job Portal");
        assert_eq!(settings.mobile_seo.theme_color, "#000000");
        assert!(settings.mobile_seo.enable_lazy_load);
        assert!(settings.indexing.noindex_tags);
    }

    #[test]
    fn test_stored_quick_links_replace_defaults() {
        let stored = json!({ "quick_links": [] });
        let settings: SiteSettings = serde_json::from_value(stored).unwrap();
        assert!(settings.quick_links.is_empty());
    }

    #[test]
    fn test_quick_link_kind_serializes_as_type() {
        let link = &SiteSettings::default().quick_links[1];
        let value = serde_json::to_value(link).unwrap();
        assert_eq!(value["type"], "iframe");
        assert_eq!(value["category"], "Admit Card");
    }
}
