//! All API endpoint setup

use axum::Router;
use axum::routing::get;

pub use request::Form;
pub use request::PathParameters;
pub use request::QueryParameters;
pub use response::Error;
pub use response::Success;

mod accommodations;
mod destinations;
mod itinerary_items;
mod notes;
mod pagination;
mod request;
mod response;
mod transports;
mod trips;
mod utils;
mod validation;

/// Get the Axum router for all API routes
pub fn router() -> Router {
    let trips = Router::new()
        .route("/", get(trips::list).post(trips::create))
        .route(
            "/{trip}",
            get(trips::single).put(trips::update).delete(trips::delete),
        );

    let destinations = Router::new()
        .route("/", get(destinations::list).post(destinations::create))
        .route("/search", get(destinations::search))
        .route(
            "/{destination}",
            get(destinations::single)
                .put(destinations::update)
                .delete(destinations::delete),
        );

    let itinerary = Router::new()
        .route("/", get(itinerary_items::list).post(itinerary_items::create))
        .route(
            "/{item}",
            get(itinerary_items::single)
                .put(itinerary_items::update)
                .delete(itinerary_items::delete),
        );

    let accommodations = Router::new()
        .route("/", get(accommodations::list).post(accommodations::create))
        .route(
            "/{accommodation}",
            get(accommodations::single)
                .put(accommodations::update)
                .delete(accommodations::delete),
        );

    let transport = Router::new()
        .route("/", get(transports::list).post(transports::create))
        .route(
            "/{transport}",
            get(transports::single)
                .put(transports::update)
                .delete(transports::delete),
        );

    let notes = Router::new()
        .route("/", get(notes::list).post(notes::create))
        .route(
            "/{note}",
            get(notes::single).put(notes::update).delete(notes::delete),
        );

    Router::new()
        .nest("/trips", trips)
        .nest("/destinations", destinations)
        .nest("/itinerary", itinerary)
        .nest("/accommodations", accommodations)
        .nest("/transport", transport)
        .nest("/notes", notes)
}
