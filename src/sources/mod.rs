pub mod traits;
pub mod http;
pub mod syndication;
pub mod google_trends;
pub mod reddit;
pub mod hacker_news;
pub mod rss_news;
pub mod registry;

pub use traits::TrendSource;
pub use http::{HttpClient, HttpRequest, ReqwestHttpClient};
pub use registry::SourceRegistry;
