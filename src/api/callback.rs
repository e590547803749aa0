use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::types::{CallbackEvent, CallbackSlot};

// The implicit grant returns the token in the URL fragment, which the
// browser never sends to the server. This page rewrites the fragment into
// the query string and re-requests the same path so the parameters arrive.
const FRAGMENT_RELAY_PAGE: &str = "<!DOCTYPE html>\
<html>\
<head><title>sartdl</title></head>\
<body>\
<h4>Completing authorization...</h4>\
<script>\
var hash = window.location.hash;\
if (hash && hash.length > 1) {\
  window.location.replace(window.location.pathname + '?' + hash.substring(1));\
} else {\
  document.body.innerHTML = '<h4>Missing token response.</h4>';\
}\
</script>\
</body>\
</html>";

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(slot): Extension<CallbackSlot>,
) -> Html<&'static str> {
    if let Some(access_token) = params.get("access_token") {
        let mut pending = slot.lock().await;
        let Some(sender) = pending.take() else {
            return Html("<h4>No pending authorization.</h4>");
        };

        let event = CallbackEvent::TokenReceived {
            access_token: access_token.clone(),
            token_type: params
                .get("token_type")
                .cloned()
                .unwrap_or_else(|| "Bearer".to_string()),
            expires_in: params
                .get("expires_in")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            state: params.get("state").cloned(),
        };

        // The session may have timed out between delivery and send.
        let _ = sender.send(event);
        Html("<h2>Authorization successful.</h2><p>Close the browser window.</p>")
    } else if let Some(error) = params.get("error") {
        let mut pending = slot.lock().await;
        let Some(sender) = pending.take() else {
            return Html("<h4>No pending authorization.</h4>");
        };

        let _ = sender.send(CallbackEvent::ErrorReceived {
            error: error.clone(),
            state: params.get("state").cloned(),
        });
        Html("<h4>Authorization failed.</h4><p>Close the browser window.</p>")
    } else {
        Html(FRAGMENT_RELAY_PAGE)
    }
}
