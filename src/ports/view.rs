//! Display surface driven by the presenter.

use std::fmt;

use crate::error::Notice;

/// Screens the profile page can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    PhotoGallery,
    ProfileDetail,
    ProfileSettings,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Destination::Login => write!(f, "login"),
            Destination::PhotoGallery => write!(f, "photo_gallery"),
            Destination::ProfileDetail => write!(f, "profile_detail"),
            Destination::ProfileSettings => write!(f, "profile_settings"),
        }
    }
}

/// Commands the presenter issues to the profile page.
///
/// Only ever called from the UI context. Every command is fire-and-forget.
pub trait ProfileView {
    fn set_thumbnail_loading(&self, loading: bool);

    fn set_detail_loading(&self, loading: bool);

    fn set_bio(&self, bio: &str);

    fn set_interests(&self, interests: &str);

    fn set_name(&self, name: &str);

    fn set_email(&self, email: &str);

    /// Show the bundled placeholder photo.
    fn set_default_profile_photo(&self);

    /// Start loading the profile photo. The view calls back
    /// `on_thumbnail_loaded` once it is displayed.
    fn set_profile_photo_url(&self, url: &str);

    /// Show a transient message.
    fn show_message(&self, notice: Notice);

    /// Ask the user to confirm logout.
    fn show_logout_prompt(&self);

    fn navigate(&self, destination: Destination);
}
