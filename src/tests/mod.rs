mod health;
mod itinerary_items;
mod partial_updates;
mod search;
mod trips;
