//! Profile record shown on the page.

use serde::{Deserialize, Serialize};

/// Profile as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub bio: String,
    pub interests: String,
    pub name: String,
    pub email: String,
    /// Empty when the user never set a photo.
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

/// What the view should display as profile photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Photo<'a> {
    /// Bundled placeholder image.
    Default,
    /// Remote image. Not validated, the view's loader deals with bad URLs.
    Url(&'a str),
}

impl Profile {
    /// Pick the photo to display.
    pub fn photo(&self) -> Photo<'_> {
        if self.photo_url.is_empty() {
            Photo::Default
        } else {
            Photo::Url(&self.photo_url)
        }
    }

    /// Update `photo_url` of [`Profile`].
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = url.into();
        self
    }
}
