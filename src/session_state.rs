use std::future::ready;
use std::future::Ready;

use actix_session::Session;
use actix_session::SessionExt;
use actix_session::SessionGetError;
use actix_session::SessionInsertError;
use actix_web::FromRequest;

/// Wrapper around `actix_session::Session`, so that keys are methods instead
/// of loose strings
pub struct TypedSession(Session);

impl TypedSession {
    const ADMIN_KEY: &'static str = "admin";

    /// Rotate the session key (on login, against fixation)
    pub fn renew(&self) { self.0.renew(); }

    pub fn insert_admin(
        &self,
        username: &str,
    ) -> Result<(), SessionInsertError> {
        self.0.insert(Self::ADMIN_KEY, username)
    }

    pub fn get_admin(&self) -> Result<Option<String>, SessionGetError> { self.0.get(Self::ADMIN_KEY) }

    pub fn logout(self) { self.0.purge() }
}

impl FromRequest for TypedSession {
    // "We return the same error returned by the implementation of
    // `FromRequest` for `Session`"
    type Error = <Session as FromRequest>::Error;

    // no I/O is needed to read the session, so the future is ready at once
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
