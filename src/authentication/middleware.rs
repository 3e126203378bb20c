use std::ops::Deref;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::error::InternalError;
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web_lab::middleware::Next;

use crate::session_state::TypedSession;
use crate::utils::error_500;
use crate::utils::redirect;

/// Username of the logged-in admin, placed in the request extensions by
/// `reject_anonymous_users`
#[derive(Clone, Debug)]
pub struct AdminUser(String);

impl Deref for AdminUser {
    type Target = str;
    fn deref(&self) -> &Self::Target { &self.0 }
}

/// Guard for the `/admin` scope: anonymous requests are redirected to
/// `/login`, the others carry an `AdminUser` extension.
///
/// See `actix_web_lab::middleware::from_fn`.
pub async fn reject_anonymous_users(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    // a `ServiceRequest`'s parts can be passed straight to `from_request`
    let (raw_req, payload) = req.parts_mut();
    let session = TypedSession::from_request(raw_req, payload).await?;

    match session.get_admin().map_err(error_500)? {
        Some(username) => {
            req.extensions_mut().insert(AdminUser(username));
            next.call(req).await
        }
        None => {
            let resp = redirect("/login");
            let err = anyhow::anyhow!("You must be logged in to access this resource.");
            Err(InternalError::from_response(err, resp).into())
        }
    }
}
