use std::fmt;

/// Where the page is in its fetch sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Idle,
    FetchingIdentity,
    FetchingProfile,
    Loaded,
    /// Sent back to login, either after a failure or a sign out.
    Unauthenticated,
    TornDown,
}

impl PageState {
    /// A fetch sequence is running.
    pub fn is_loading(self) -> bool {
        matches!(self, PageState::FetchingIdentity | PageState::FetchingProfile)
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PageState::Idle => "idle",
            PageState::FetchingIdentity => "fetching_identity",
            PageState::FetchingProfile => "fetching_profile",
            PageState::Loaded => "loaded",
            PageState::Unauthenticated => "unauthenticated",
            PageState::TornDown => "torn_down",
        };
        f.write_str(name)
    }
}
