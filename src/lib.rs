//! Presenter of a chat client's profile page.
//!
//! [`ProfilePagePresenter`] resolves the signed-in identity, fetches its
//! profile and drives a [`ports::ProfileView`]. Backend calls run on a worker
//! runtime and are cancelled when the page goes away.

#![forbid(unsafe_code)]
#![deny(unused_mut)]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod error;
pub mod ports;
pub mod presenter;
pub mod profile;
pub mod strings;
pub mod telemetry;

pub use presenter::{PageState, ProfilePagePresenter, Schedulers};
