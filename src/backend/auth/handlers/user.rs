use axum::response::Json;

use crate::shared::MessageResponse;

/// GET /user
pub async fn user_hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        msg: "Hello, this is your GET /user response ".to_string(),
    })
}
