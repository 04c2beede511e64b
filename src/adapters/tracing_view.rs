//! View writing every command to the log. Used by the demo binary.

use crate::error::Notice;
use crate::ports::{Destination, ProfileView};
use crate::strings::Strings;

const TARGET: &str = "profilepage::view";

/// Headless view logging commands through `tracing`.
#[derive(Debug, Default)]
pub struct TracingView {
    strings: Strings,
}

impl TracingView {
    /// Create a new [`TracingView`] resolving messages with `strings`.
    pub fn new(strings: Strings) -> Self {
        Self { strings }
    }

    /// Text the user would read for `notice`.
    pub fn render(&self, notice: &Notice) -> String {
        match notice {
            Notice::Localized(key) => self.strings.resolve(*key).to_owned(),
            Notice::Text(text) => text.clone(),
        }
    }
}

impl ProfileView for TracingView {
    fn set_thumbnail_loading(&self, loading: bool) {
        tracing::info!(target: TARGET, loading, "thumbnail loading indicator");
    }

    fn set_detail_loading(&self, loading: bool) {
        tracing::info!(target: TARGET, loading, "detail loading indicators");
    }

    fn set_bio(&self, bio: &str) {
        tracing::info!(target: TARGET, bio, "bio");
    }

    fn set_interests(&self, interests: &str) {
        tracing::info!(target: TARGET, interests, "interests");
    }

    fn set_name(&self, name: &str) {
        tracing::info!(target: TARGET, name, "name");
    }

    fn set_email(&self, email: &str) {
        tracing::info!(target: TARGET, email, "email");
    }

    fn set_default_profile_photo(&self) {
        tracing::info!(target: TARGET, "default profile photo");
    }

    fn set_profile_photo_url(&self, url: &str) {
        tracing::info!(target: TARGET, url, "loading profile photo");
    }

    fn show_message(&self, notice: Notice) {
        let text = self.render(&notice);
        tracing::info!(
            target: TARGET,
            locale = self.strings.locale(),
            %text,
            "message"
        );
    }

    fn show_logout_prompt(&self) {
        tracing::info!(target: TARGET, "logout confirmation prompt");
    }

    fn navigate(&self, destination: Destination) {
        tracing::info!(target: TARGET, %destination, "navigate");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::strings::StringKey;

    #[test]
    fn test_render() {
        let table = HashMap::from([(
            "error_retrieving_data".to_owned(),
            "Could not load your profile.".to_owned(),
        )]);
        let view = TracingView::new(Strings::new("en", table));

        assert_eq!(
            view.render(&Notice::Localized(StringKey::ErrorRetrievingData)),
            "Could not load your profile."
        );
        assert_eq!(
            view.render(&Notice::Text("network down".into())),
            "network down"
        );
    }
}
