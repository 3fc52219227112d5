pub mod chat;
pub mod post;
pub mod settings;

pub use post::{JobCategory, JobPost, PostStatus};
pub use settings::SiteSettings;
