mod notice;
mod page_header;

pub use notice::NoticeBanner;
pub use page_header::PageHeader;
