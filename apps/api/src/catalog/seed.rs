//! Reference data and the initial post set written on first run.

use serde::Serialize;

use crate::models::post::{
    AgeLimit, DateRow, FeeRow, PostDetails, PostLink, SeoConfig, SocialLinks,
};
use crate::models::{JobCategory, JobPost, PostStatus};

/// State names paired with their official language.
pub const STATES: [(&str, &str); 30] = [
    ("Andhra Pradesh", "Telugu"),
    ("Arunachal Pradesh", "English"),
    ("Assam", "Assamese"),
    ("Bihar", "Hindi"),
    ("Chhattisgarh", "Hindi"),
    ("Goa", "Konkani"),
    ("Gujarat", "Gujarati"),
    ("Haryana", "Hindi"),
    ("Himachal Pradesh", "Hindi"),
    ("Jharkhand", "Hindi"),
    ("Karnataka", "Kannada"),
    ("Kerala", "Malayalam"),
    ("Madhya Pradesh", "Hindi"),
    ("Maharashtra", "Marathi"),
    ("Manipur", "Manipuri"),
    ("Meghalaya", "English"),
    ("Mizoram", "Mizo"),
    ("Nagaland", "English"),
    ("Odisha", "Odia"),
    ("Punjab", "Punjabi"),
    ("Rajasthan", "Hindi"),
    ("Sikkim", "English"),
    ("Tamil Nadu", "Tamil"),
    ("Telangana", "Telugu"),
    ("Tripura", "Bengali"),
    ("Uttar Pradesh", "Hindi"),
    ("Uttarakhand", "Hindi"),
    ("West Bengal", "Bengali"),
    ("Delhi", "Hindi"),
    ("All India", "Hindi/English"),
];

#[derive(Debug, Clone, Serialize)]
pub struct StateInfo {
    pub name: &'static str,
    pub language: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub slug: String,
    pub icon: &'static str,
}

pub fn states() -> Vec<StateInfo> {
    STATES
        .iter()
        .map(|&(name, language)| StateInfo { name, language })
        .collect()
}

pub fn categories() -> Vec<CategoryInfo> {
    [
        (JobCategory::LatestJob, "briefcase"),
        (JobCategory::Result, "check-circle"),
        (JobCategory::AdmitCard, "file-text"),
        (JobCategory::AnswerKey, "key"),
        (JobCategory::Syllabus, "book-open"),
        (JobCategory::Admission, "graduation-cap"),
        (JobCategory::Important, "alert-circle"),
        (JobCategory::Certificate, "shield-check"),
        (JobCategory::Scholarship, "coins"),
        (JobCategory::News, "newspaper"),
    ]
    .into_iter()
    .map(|(category, icon)| CategoryInfo {
        title: category.title(),
        slug: category.slug(),
        icon,
    })
    .collect()
}

pub fn initial_posts() -> Vec<JobPost> {
    let mut post = JobPost::new(
        "ssc-cgl-2024",
        "SSC CGL 2024 Apply Online Form",
        JobCategory::LatestJob,
    );
    post.short_title = Some("SSC CGL 2024".to_string());
    post.slug = "ssc-cgl-2024-apply-online".to_string();
    post.sub_category = Some("SSC".to_string());
    post.state = Some("All India".to_string());
    post.department = Some("Staff Selection Commission".to_string());
    post.status = PostStatus::Published;
    post.update_date = "15 May 2024".to_string();
    post.last_date = Some("15 Jun 2024".to_string());
    post.short_description =
        "Staff Selection Commission (SSC) Combined Graduate Level CGL Examination 2024."
            .to_string();
    post.total_vacancy = Some("17727 Approx".to_string());
    post.views = 145_020;
    post.show_in_home = true;
    post.show_in_trending = true;
    post.full_content = Some(String::new());
    post.seo = SeoConfig {
        seo_title: Some("SSC CGL 2024 Notification, Apply Online, Syllabus & Exam Date".to_string()),
        seo_description: Some(
            "SSC CGL Recruitment 2024: Apply online for 17727 vacancies. Check eligibility, exam pattern, syllabus and download notification PDF."
                .to_string(),
        ),
        keywords: Some(
            "SSC CGL 2024, SSC CGL Notification, SSC Recruitment, Government Jobs 2024".to_string(),
        ),
        ..SeoConfig::default()
    };
    post.details = PostDetails {
        introduction: Some(
            "Friends, this is a huge opportunity for graduates! The SSC CGL notification has been released for over 17,000 posts."
                .to_string(),
        ),
        fee: vec![
            fee("General / OBC / EWS", "₹ 100/-"),
            fee("SC / ST / PH", "₹ 0/-"),
            fee("All Category Female", "₹ 0/-"),
        ],
        dates: vec![
            date("Application Begin", "15 May 2024"),
            date("Last Date for Apply", "15 Jun 2024"),
            date("Exam Date", "Sep-Oct 2024"),
        ],
        age_limit: Some(AgeLimit {
            min: Some("18".to_string()),
            max: Some("27".to_string()),
            as_on: Some("01/08/2024".to_string()),
            relaxation: Vec::new(),
        }),
        qualification: vec![
            "Bachelor Degree in Any Stream from Recognized University in India.".to_string(),
        ],
        how_to_apply: vec![
            "First, visit the official SSC website.".to_string(),
            "Register with your basic details.".to_string(),
            "Fill the application form carefully.".to_string(),
            "Upload photo and signature.".to_string(),
        ],
        important_documents: vec![
            "Aadhar Card".to_string(),
            "10th Marksheet".to_string(),
            "Graduation Certificate".to_string(),
            "Passport Photo".to_string(),
        ],
        links: vec![
            link("Apply Online"),
            link("Download Notification"),
            link("Official Website"),
        ],
        social_links: Some(SocialLinks::default()),
        ..PostDetails::default()
    };

    vec![post]
}

fn fee(category: &str, amount: &str) -> FeeRow {
    FeeRow {
        category: category.to_string(),
        amount: amount.to_string(),
    }
}

fn date(label: &str, date: &str) -> DateRow {
    DateRow {
        label: label.to_string(),
        date: date.to_string(),
        note: None,
    }
}

fn link(label: &str) -> PostLink {
    PostLink {
        label: label.to_string(),
        url: "#".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_states_end_with_all_india() {
        let states = states();
        assert_eq!(states.len(), 30);
        assert_eq!(states[29].name, "All India");
        assert_eq!(states[29].language, "Hindi/English");
    }

    #[test]
    fn test_categories_cover_every_variant_once() {
        let cats = categories();
        assert_eq!(cats.len(), JobCategory::ALL.len());
        assert_eq!(cats[0].slug, "latest-job");
        assert!(cats.iter().any(|c| c.title == "Certificate Verification"));
    }

    #[test]
    fn test_initial_post_is_published() {
        let posts = initial_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].status, PostStatus::Published);
        assert_eq!(posts[0].details.fee.len(), 3);
    }
}
