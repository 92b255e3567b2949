mod client;
mod google;
mod provider;

pub use client::{OAuth2Client, OAuth2ClientFactory};
pub use google::{GoogleClientFactory, GoogleOAuth2Client};
pub use provider::ClientProvider;
