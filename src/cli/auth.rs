use crate::{error, info, spotify, success};

pub async fn auth() {
    match spotify::auth::authorize().await {
        Ok(token) => {
            success!("Authorization successful!");
            info!(
                "Token valid for {} seconds. Nothing is persisted; every command authorizes itself.",
                token.expires_in
            );
        }
        Err(err) => {
            error!("Authorization failed: {}", err);
        }
    }
}
