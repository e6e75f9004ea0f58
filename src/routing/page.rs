use std::fmt;

/// A page the shell knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Logout,
}

impl Page {
    /// Document title shown while the page is active.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in | Analytics",
            Self::Logout => "Signed out | Analytics",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "Login"),
            Self::Logout => write!(f, "Logout"),
        }
    }
}
