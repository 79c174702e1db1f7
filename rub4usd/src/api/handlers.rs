use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::{extract, Json};
use serde_json::{Number, Value};
use tracing::info;

use crate::api::responses;
use crate::api::server::AppState;
use crate::error::Error;
use crate::service::rate::RateProvider;

const JSON_MEDIA_TYPE: &str = "application/json";

pub async fn convert<P: RateProvider>(
    extract::State(state): extract::State<AppState<P>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<responses::Conversion>, Error> {
    if !is_json(&headers) {
        return Err(Error::UnsupportedMediaType);
    }

    let req: Value = serde_json::from_slice(&body)
        .map_err(|err| Error::BadRequest(format!("invalid json body: {err}")))?;

    let (usd, amount) = get_usd(&req)?;

    info!("got conversion request for usd={usd}");

    let rate = state.rate_provider.get_usd_rate().await?;

    Ok(Json(responses::Conversion::new(usd, amount, rate)))
}

pub async fn not_implemented() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

fn is_json(headers: &HeaderMap) -> bool {
    headers.get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == JSON_MEDIA_TYPE)
}

fn get_usd(req: &Value) -> Result<(Number, f64), Error> {
    let usd = match req.get("usd") {
        Some(Value::Number(n)) => n,
        Some(other) => return Err(Error::BadRequest(format!("usd must be a number, got {other}"))),
        None => return Err(Error::BadRequest("usd is missing".into())),
    };

    match usd.as_f64() {
        Some(amount) if amount >= 0.0 => Ok((usd.clone(), amount)),
        _ => Err(Error::BadRequest(format!("usd must not be negative, got {usd}"))),
    }
}
