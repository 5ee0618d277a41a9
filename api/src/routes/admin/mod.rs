//! Administrative routes; every handler here requires the `ADMIN` role

use actix_web::HttpResponse;
use tg_core::services::RoleRequirement;

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;

pub const ADMIN_ROLE: &str = "ADMIN";

/// Handler for GET /api/v1/admin/ping
///
/// Liveness probe for administrators. 403 for authenticated callers
/// without the `ADMIN` role.
pub async fn ping(auth: AuthContext) -> HttpResponse {
    if let Err(e) = auth.require_roles(&RoleRequirement::any_of([ADMIN_ROLE])) {
        tracing::info!(
            subject = %auth.subject,
            required_role = ADMIN_ROLE,
            "Admin access denied"
        );
        return handle_domain_error(e);
    }

    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "subject": auth.subject,
    }))
}
