//! View that records every command, for tests and previews.

use std::cell::RefCell;

use crate::error::Notice;
use crate::ports::{Destination, ProfileView};

/// One command received by a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    ThumbnailLoading(bool),
    DetailLoading(bool),
    Bio(String),
    Interests(String),
    Name(String),
    Email(String),
    DefaultPhoto,
    PhotoUrl(String),
    Message(Notice),
    LogoutPrompt,
    Navigate(Destination),
}

/// View recording commands in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    commands: RefCell<Vec<ViewCommand>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far.
    pub fn commands(&self) -> Vec<ViewCommand> {
        self.commands.borrow().clone()
    }

    /// Commands received so far, clearing the record.
    pub fn take(&self) -> Vec<ViewCommand> {
        self.commands.take()
    }

    fn push(&self, command: ViewCommand) {
        self.commands.borrow_mut().push(command);
    }
}

impl ProfileView for RecordingView {
    fn set_thumbnail_loading(&self, loading: bool) {
        self.push(ViewCommand::ThumbnailLoading(loading));
    }

    fn set_detail_loading(&self, loading: bool) {
        self.push(ViewCommand::DetailLoading(loading));
    }

    fn set_bio(&self, bio: &str) {
        self.push(ViewCommand::Bio(bio.to_owned()));
    }

    fn set_interests(&self, interests: &str) {
        self.push(ViewCommand::Interests(interests.to_owned()));
    }

    fn set_name(&self, name: &str) {
        self.push(ViewCommand::Name(name.to_owned()));
    }

    fn set_email(&self, email: &str) {
        self.push(ViewCommand::Email(email.to_owned()));
    }

    fn set_default_profile_photo(&self) {
        self.push(ViewCommand::DefaultPhoto);
    }

    fn set_profile_photo_url(&self, url: &str) {
        self.push(ViewCommand::PhotoUrl(url.to_owned()));
    }

    fn show_message(&self, notice: Notice) {
        self.push(ViewCommand::Message(notice));
    }

    fn show_logout_prompt(&self) {
        self.push(ViewCommand::LogoutPrompt);
    }

    fn navigate(&self, destination: Destination) {
        self.push(ViewCommand::Navigate(destination));
    }
}
