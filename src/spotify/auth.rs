use std::{fmt, sync::Arc, time::Duration};

use chrono::Utc;
use tokio::sync::{Mutex, oneshot};

use crate::{
    config,
    server::{CallbackServer, ServerError},
    types::{CallbackEvent, CallbackSlot, Token},
    utils, warning,
};

/// Everything that can end the authorization handshake without a token.
#[derive(Debug)]
pub enum AuthError {
    Server(ServerError),
    Callback {
        error: String,
        state: Option<String>,
    },
    StateMismatch,
    Interrupted,
    Timeout(u64),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Server(e) => write!(f, "{}", e),
            AuthError::Callback { error, .. } => {
                write!(f, "authorization error received: {}", error)
            }
            AuthError::StateMismatch => {
                write!(f, "callback state does not match this authorization attempt")
            }
            AuthError::Interrupted => write!(f, "authorization was interrupted"),
            AuthError::Timeout(secs) => {
                write!(f, "no authorization callback within {} seconds", secs)
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ServerError> for AuthError {
    fn from(err: ServerError) -> Self {
        AuthError::Server(err)
    }
}

/// Runs the complete OAuth 2.0 implicit grant flow with Spotify.
///
/// This function orchestrates the entire authorization handshake:
/// 1. Creating the one-shot completion channel the callback resolves
/// 2. Starting the local callback server on the configured address
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting (bounded) for exactly one terminal callback
/// 5. Stopping the server so the fixed port is released
///
/// The implicit grant returns the access token directly in the redirect
/// fragment; there is no code-for-token exchange and no refresh token. The
/// returned [`Token`] is held in memory only and expires on Spotify's side
/// after roughly an hour.
///
/// # Authorization Flow
///
/// 1. **Channel Setup**: A `oneshot` sender is placed in the shared
///    callback slot; the first terminal callback takes it and resolves the
///    session, later deliveries are no-ops
/// 2. **Server Start**: The callback server binds the configured address
///    and serves the fragment-relay and dispatch handler
/// 3. **Browser Launch**: The authorization URL (client id, `token`
///    response type, redirect URI, random `state`, scopes) opens in the
///    default browser; on failure a warning shows the URL for manual
///    navigation
/// 4. **Bounded Wait**: The session suspends on the channel under the
///    configured timeout so an abandoned browser tab cannot hang the
///    process
/// 5. **Teardown**: The server is stopped and its port released before this
///    function returns, on every path
///
/// # Errors
///
/// - [`AuthError::Server`] - the listener could not be started (address in
///   use, invalid configured address)
/// - [`AuthError::Callback`] - Spotify redirected with an error (e.g. the
///   user denied access)
/// - [`AuthError::StateMismatch`] - the callback did not echo this
///   attempt's `state` parameter
/// - [`AuthError::Interrupted`] - the callback channel closed without an
///   event
/// - [`AuthError::Timeout`] - no callback arrived within
///   `AUTH_TIMEOUT_SECONDS`
///
/// # Example
///
/// ```
/// let token = spotify::auth::authorize().await?;
/// println!("token expires in {}s", token.expires_in);
/// ```
pub async fn authorize() -> Result<Token, AuthError> {
    let (sender, receiver) = oneshot::channel();
    let slot: CallbackSlot = Arc::new(Mutex::new(Some(sender)));

    let server = CallbackServer::start(&config::server_addr(), Arc::clone(&slot)).await?;

    // Construct the authorization URL
    let state = utils::generate_state_token();
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=token&redirect_uri={redirect_uri}&state={state}&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = urlencoding::encode(&config::spotify_redirect_uri()),
        state = state,
        scope = urlencoding::encode(&config::spotify_scope()),
    );

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // Wait for the callback, then release the port regardless of outcome.
    let outcome = wait_for_callback(receiver, &state).await;
    server.stop().await;
    outcome
}

/// Waits for the callback event and turns it into a token or failure.
///
/// Suspends on the one-shot channel under `AUTH_TIMEOUT_SECONDS`. Exactly
/// one of the two event sources resolves the channel: the token callback or
/// the error callback. A token whose `state` does not match
/// `expected_state` is rejected; it belongs to a different (or forged)
/// authorization attempt.
///
/// # Returns
///
/// The [`Token`] stamped with the current time as `obtained_at`, or the
/// [`AuthError`] describing why the handshake ended without one.
async fn wait_for_callback(
    receiver: oneshot::Receiver<CallbackEvent>,
    expected_state: &str,
) -> Result<Token, AuthError> {
    let max_wait = config::auth_timeout_secs();

    let event = match tokio::time::timeout(Duration::from_secs(max_wait), receiver).await {
        Ok(Ok(event)) => event,
        Ok(Err(_)) => return Err(AuthError::Interrupted),
        Err(_) => return Err(AuthError::Timeout(max_wait)),
    };

    match event {
        CallbackEvent::TokenReceived {
            access_token,
            token_type,
            expires_in,
            state,
        } => {
            if state.as_deref() != Some(expected_state) {
                return Err(AuthError::StateMismatch);
            }

            Ok(Token {
                access_token,
                token_type,
                expires_in,
                obtained_at: Utc::now().timestamp() as u64,
            })
        }
        CallbackEvent::ErrorReceived { error, state } => Err(AuthError::Callback { error, state }),
    }
}
