//! UI helpers shared by all pages

pub mod button;
pub mod format;
pub mod html;
pub mod notice;
pub mod timing;

pub use button::LoadingButton;
pub use format::{format_date, format_price, format_time};
pub use notice::{Alert, Expiring, NoticeKind, Toast, ToastHost};
