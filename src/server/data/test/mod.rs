mod cost;
mod invite;
mod itinerary;
mod member;
mod poll;
mod task;
mod trip;
mod user;
