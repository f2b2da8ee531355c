pub mod login_viewmodel;
pub mod room_viewmodel;
pub mod session_viewmodel;

pub use login_viewmodel::LoginViewModel;
pub use room_viewmodel::RoomViewModel;
pub use session_viewmodel::SessionViewModel;
