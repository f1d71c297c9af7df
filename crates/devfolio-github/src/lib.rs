// Devfolio GitHub client
//
// The external repo lookup collaborator: fetches a user's most recently
// created repositories from the GitHub REST API.

pub mod client;
pub mod error;

pub use client::{GithubClient, GithubClientBuilder, RepoLookup};
pub use error::{GithubError, Result};
