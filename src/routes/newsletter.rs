use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;
use chrono::Utc;
use serde::Deserialize;
use tera::Tera;

use crate::domain::EmailAddress;
use crate::domain::NewNewsletterSubscriber;
use crate::routes::home::render_landing;
use crate::routes::home::HomeQuery;
use crate::routes::home::NewsletterState;
use crate::store_client::StoreClient;
use crate::store_client::NEWSLETTER_TABLE;
use crate::templates::Notice;
use crate::utils::redirect;

#[derive(Deserialize)]
pub struct NewsletterFormData {
    #[serde(default)]
    email: String,
}

impl TryFrom<&NewsletterFormData> for NewNewsletterSubscriber {
    type Error = String;
    fn try_from(value: &NewsletterFormData) -> Result<Self, Self::Error> {
        let email = EmailAddress::parse(value.email.clone())?;
        Ok(Self { email })
    }
}

/// `POST /newsletter`
#[tracing::instrument(
    name = "Subscribing to the newsletter",
    skip(form, store, tera),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe_newsletter(
    form: web::Form<NewsletterFormData>,
    store: web::Data<StoreClient>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    let subscriber = match NewNewsletterSubscriber::try_from(&form.0) {
        Ok(subscriber) => subscriber,
        Err(e) => {
            return render_landing(
                &tera,
                &HomeQuery::default(),
                &[],
                NewsletterState {
                    email: &form.email,
                    error: Some(e),
                },
                StatusCode::BAD_REQUEST,
            )
        }
    };

    if let Err(e) = store
        .insert(NEWSLETTER_TABLE, &[subscriber.to_record(Utc::now())])
        .await
    {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to store newsletter subscriber"
        );
        return render_landing(
            &tera,
            &HomeQuery::default(),
            &[Notice::error(
                "Error al suscribirse. Hubo un problema al procesar tu suscripción. Por favor, \
                 intentá nuevamente.",
            )],
            NewsletterState {
                email: &form.email,
                error: None,
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        );
    }

    FlashMessage::success(
        "¡Gracias por suscribirte! Te mantendremos actualizado con las últimas novedades.",
    )
    .send();
    Ok(redirect("/"))
}
