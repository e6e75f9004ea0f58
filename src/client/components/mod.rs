pub mod navbar;
pub mod page;
pub mod page_view;

pub use navbar::Navbar;
pub use page::PageContainer;
pub use page_view::{use_page, PageView};
