use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;

use crate::session_state::TypedSession;
use crate::utils::redirect;

/// `POST /admin/logout`
///
/// Only reachable with a session (see `reject_anonymous_users`)
pub async fn logout(session: TypedSession) -> HttpResponse {
    session.logout();
    FlashMessage::info("Cerraste sesión correctamente.").send();
    redirect("/login")
}
