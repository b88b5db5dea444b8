use crate::ApiApplication;

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::ACCEPT},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use sealbid_core::{
    models::{BidForm, BidReceipt, HighestBid, display_amount},
    service::{BidService, TRY_AGAIN_MESSAGE},
};
use tracing::{Level, event};

const INDEX_HTML: &str = include_str!("../assets/index.html");
const SUBMIT_BID_HTML: &str = include_str!("../assets/submit_bid.html");
const HIGHEST_BID_HTML: &str = include_str!("../assets/highest_bid.html");

/// The routes a bidder interacts with
pub(crate) fn router<T: ApiApplication>() -> Router<BidService<T>> {
    Router::new()
        .route("/", get(bid_form::<T>))
        .route("/submit_bid", get(confirmation).post(submit_bid::<T>))
        .route("/highest_bid", get(highest_bid::<T>))
}

/// The bid form, with the configured minimum filled in.
pub(crate) async fn bid_form<T: ApiApplication>(
    State(service): State<BidService<T>>,
) -> Html<String> {
    let minimum = display_amount(service.app().rules().minimum_bid);
    Html(render(INDEX_HTML, &[("minimum_bid", minimum.as_str())]))
}

/// Accept a form-encoded submission.
///
/// # Returns
///
/// - `303 See Other`: Bid stored, redirects to the confirmation with the
///   receipt in the query string
/// - `400 Bad Request`: The form was rejected, the body says why
/// - `503 Service Unavailable`: The bid could not be stored
pub(crate) async fn submit_bid<T: ApiApplication>(
    State(service): State<BidService<T>>,
    Form(form): Form<BidForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let receipt = service.submit(&form).await.map_err(|err| {
        if err.is_user_error() {
            (StatusCode::BAD_REQUEST, err.user_message())
        } else {
            event!(Level::ERROR, err = err.to_string(), "submission failed");
            (StatusCode::SERVICE_UNAVAILABLE, err.user_message())
        }
    })?;

    Ok(Redirect::to(&confirmation_uri(&receipt)))
}

/// Echo an accepted bid back to the bidder.
///
/// Nothing is looked up: the receipt is whatever the redirect carried. A
/// malformed query (such as a bid id that is not six digits) is a `400`.
/// Browsers asking for `text/html` get a page, everything else gets JSON.
pub(crate) async fn confirmation(
    headers: HeaderMap,
    Query(receipt): Query<BidReceipt>,
) -> Response {
    if wants_html(&headers) {
        Html(render(
            SUBMIT_BID_HTML,
            &[
                ("name", receipt.name.as_str()),
                ("bid_amount", display_amount(receipt.bid_amount).as_str()),
                ("bid_id", receipt.bid_id.as_str()),
            ],
        ))
        .into_response()
    } else {
        Json(receipt).into_response()
    }
}

/// The current leading bid with the bidder's name masked.
///
/// Browsers asking for `text/html` get a page, everything else gets JSON.
///
/// # Returns
///
/// - `200 OK`: The leading bid, or the "No bids" placeholder
/// - `503 Service Unavailable`: Storage could not be read
pub(crate) async fn highest_bid<T: ApiApplication>(
    State(service): State<BidService<T>>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let highest = service.highest().await.map_err(|_| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            TRY_AGAIN_MESSAGE.to_string(),
        )
    })?;

    if wants_html(&headers) {
        Ok(Html(render(
            HIGHEST_BID_HTML,
            &[
                ("redacted_name", highest.redacted_name.as_str()),
                ("bid_amount", display_amount(highest.bid_amount).as_str()),
                ("bid_id", highest.bid_id.as_str()),
            ],
        ))
        .into_response())
    } else {
        Ok(Json(highest).into_response())
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Fill `{{key}}` placeholders in a page with HTML-escaped values.
///
/// Substituted text is never scanned again, and unknown placeholders are
/// left as they are.
fn render(page: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(page.len());
    let mut rest = page;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let Some(end) = tail.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &tail[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(&escape(value)),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &tail[end + 2..];
    }

    out.push_str(rest);
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn confirmation_uri(receipt: &BidReceipt) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", &receipt.name)
        .append_pair("bid_amount", &receipt.bid_amount.to_string())
        .append_pair("bid_id", receipt.bid_id.as_str())
        .finish();

    format!("/submit_bid?{query}")
}
