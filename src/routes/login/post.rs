use std::fmt::Debug;

use actix_web::error::InternalError;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;
use secrecy::Secret;
use serde::Deserialize;

use crate::authentication::validate_credentials;
use crate::authentication::AuthError;
use crate::authentication::Credentials;
use crate::configuration::AdminSettings;
use crate::routes::error_chain_fmt;
use crate::session_state::TypedSession;
use crate::utils::redirect;

/// Login credentials
#[derive(Deserialize)]
pub struct LoginFormData {
    username: String,
    password: Secret<String>,
}

#[derive(thiserror::Error)]
pub enum LoginError {
    // shown in the browser
    #[error("Usuario o contraseña incorrectos.")]
    AuthError(#[source] anyhow::Error),
    #[error("Algo salió mal. Por favor, intentá nuevamente.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for LoginError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Every failure goes back to the form, with the reason as a flash message
fn login_redirect(err: LoginError) -> InternalError<LoginError> {
    FlashMessage::error(err.to_string()).send();
    InternalError::from_response(err, redirect("/login"))
}

/// `POST /login`
///
/// On success the admin's username is stored in the (signed, cookie-backed)
/// session and the browser is sent to the panel.
#[tracing::instrument(
    name = "Validating credentials for login",
    skip(form, admin, session),
    fields(username = tracing::field::Empty)
)]
pub async fn login(
    form: web::Form<LoginFormData>,
    admin: web::Data<AdminSettings>,
    session: TypedSession,
) -> Result<HttpResponse, InternalError<LoginError>> {
    let creds = Credentials {
        username: form.0.username,
        password: form.0.password,
    };
    tracing::Span::current().record("username", tracing::field::display(&creds.username));

    match validate_credentials(creds, &admin).await {
        Ok(username) => {
            // a fresh session key on every login, against session fixation
            session.renew();
            session
                .insert_admin(&username)
                .map_err(|e| login_redirect(LoginError::UnexpectedError(e.into())))?;
            Ok(redirect("/admin"))
        }
        Err(e) => {
            let e = match e {
                AuthError::InvalidCredentials(_) => LoginError::AuthError(e.into()),
                AuthError::UnexpectedError(_) => LoginError::UnexpectedError(e.into()),
            };
            Err(login_redirect(e))
        }
    }
}
