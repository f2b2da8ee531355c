pub mod app;
pub mod login;
pub mod rooms;
pub mod toast;

pub use app::{render_app, Page};
pub use login::render_login;
pub use rooms::render_rooms;
pub use toast::render_toast;
