use super::errors::ApiResponseError;
use super::requests::WatchPayload;
use super::responses::WatchResponse;
use crate::actors::accountant::{Accountant, LogTimespent};
use crate::actors::user::{User, Watch};

use actix::Addr;
use actix_web::{
    get,
    web::{Data, Json, ServiceConfig},
    HttpResponse, Responder, Result,
};
use uuid::Uuid;

pub fn user_service(cfg: &mut ServiceConfig) {
    cfg.service(health).service(watch);
}

#[get("/")]
async fn health() -> Result<impl Responder> {
    Ok(HttpResponse::Ok().body("Server is running"))
}

#[get("/watch")]
async fn watch(
    user: Data<Addr<User>>,
    accountant: Data<Addr<Accountant>>,
    payload: Json<WatchPayload>,
) -> Result<impl Responder> {
    let WatchPayload { widgets } = payload.into_inner();
    let timespent = user
        .send(Watch {
            widgets: widgets.clone(),
        })
        .await
        .map_err(|_| ApiResponseError::InternalError)?
        .map_err(ApiResponseError::ErrorBadRequest)?;

    accountant.do_send(LogTimespent {
        request_id: Uuid::new_v4(),
        widgets,
        timespent: timespent.clone(),
    });

    Ok(Json(WatchResponse { timespent }))
}
