pub mod login;
pub mod logout;

pub use login::LoginPage;
pub use logout::LogoutPage;
