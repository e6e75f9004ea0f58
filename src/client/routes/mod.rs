pub mod home;
pub mod login;
pub mod logout;

pub use home::Home;
pub use login::Login;
pub use logout::Logout;
