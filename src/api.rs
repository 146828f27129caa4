use crate::domain::storage::Storage;
use crate::domain::CollectionDate;
use crate::error::MvpError;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

/// Read routes over the persisted rankings:
/// `GET /daily-mvp-rankings`, `GET /daily-mvp-rankings/{date}` and
/// `GET /players/{name}/daily-mvp-rankings`.
pub fn routes(
    store: Arc<dyn Storage>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let with_store = warp::any().map(move || store.clone());

    let all = warp::path!("daily-mvp-rankings")
        .and(warp::get())
        .and(with_store.clone())
        .map(list_all);

    let by_date = warp::path!("daily-mvp-rankings" / String)
        .and(warp::get())
        .and(with_store.clone())
        .map(list_for_date);

    let by_player = warp::path!("players" / String / "daily-mvp-rankings")
        .and(warp::get())
        .and(with_store)
        .map(list_for_player);

    all.or(by_date).or(by_player)
}

fn list_all(store: Arc<dyn Storage>) -> Response {
    match store.all_rankings() {
        Ok(rankings) => warp::reply::json(&rankings).into_response(),
        Err(e) => server_error(&e),
    }
}

/// Zero records for a date means the collector did not run that day — a
/// reportable condition, never an empty 200 array. An unparseable date
/// matches no documents and reports the same way.
fn list_for_date(date: String, store: Arc<dyn Storage>) -> Response {
    let rankings = match date.parse::<CollectionDate>() {
        Ok(parsed) => match store.rankings_for_date(&parsed) {
            Ok(rankings) => rankings,
            Err(e) => return server_error(&e),
        },
        Err(_) => Vec::new(),
    };

    if rankings.is_empty() {
        let body = MessageBody {
            message: format!(
                "No rankings data available for {date}. The collector may not have run on this day."
            ),
        };
        return warp::reply::with_status(warp::reply::json(&body), StatusCode::NOT_FOUND)
            .into_response();
    }

    warp::reply::json(&rankings).into_response()
}

fn list_for_player(name: String, store: Arc<dyn Storage>) -> Response {
    let name = percent_decode_str(&name).decode_utf8_lossy();

    match store.rankings_for_player(&name) {
        Ok(rankings) => warp::reply::json(&rankings).into_response(),
        Err(e) => server_error(&e),
    }
}

fn server_error(e: &MvpError) -> Response {
    error!(error = %e, "read query failed");
    let body = MessageBody {
        message: "Server error".to_string(),
    };
    warp::reply::with_status(warp::reply::json(&body), StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}
