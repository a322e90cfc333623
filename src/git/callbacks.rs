//! Remote callbacks shared by clone and push

use git2::{Cred, RemoteCallbacks};

use crate::models::Credentials;

/// Build callbacks that answer credential requests with `credentials`.
///
/// libgit2 asks again after a rejected attempt; the second request fails the
/// operation so bad credentials surface as an error instead of a loop.
pub(super) fn with_credentials(credentials: Option<&Credentials>) -> RemoteCallbacks<'_> {
    let mut callbacks = RemoteCallbacks::new();

    if let Some(credentials) = credentials {
        let mut attempted = false;
        callbacks.credentials(move |url, _username_from_url, _allowed_types| {
            if attempted {
                return Err(git2::Error::from_str(&format!(
                    "authentication failed for {url} as '{}'",
                    credentials.username()
                )));
            }
            attempted = true;
            log::debug!("supplying credentials for {url}");
            Cred::userpass_plaintext(credentials.username(), credentials.password())
        });
    }

    callbacks
}
