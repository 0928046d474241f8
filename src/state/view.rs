//! Top-level view state: the auth forms or the regret app.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Which of the two mutually exclusive screens is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Register / login forms. Shown whenever there is no session.
    #[default]
    Auth,
    /// Composer and feed, plus the logout button.
    App,
}

/// CSS `display` values for the three toggled regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Regions {
    pub auth: &'static str,
    pub app: &'static str,
    pub logout: &'static str,
}

impl ViewState {
    pub fn regions(self) -> Regions {
        match self {
            Self::Auth => Regions {
                auth: "block",
                app: "none",
                logout: "none",
            },
            Self::App => Regions {
                auth: "none",
                app: "block",
                logout: "inline-flex",
            },
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::App
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::App => "app",
        }
    }
}
