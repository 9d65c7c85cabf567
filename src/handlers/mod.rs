// HTTP handlers, split by authentication requirement:
//   public/     - no token needed (auth endpoints, public portfolio reads)
//   protected/  - behind the JWT middleware, under /api

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

pub mod protected;
pub mod public;

/// Standard success envelope shared by every endpoint.
pub(crate) fn success(data: impl Serialize) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}
