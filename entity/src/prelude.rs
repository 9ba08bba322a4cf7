pub use super::cost::Entity as Cost;
pub use super::cost_share::Entity as CostShare;
pub use super::itinerary_item::Entity as ItineraryItem;
pub use super::poll::Entity as Poll;
pub use super::poll_option::Entity as PollOption;
pub use super::task::Entity as Task;
pub use super::trip::Entity as Trip;
pub use super::trip_invite::Entity as TripInvite;
pub use super::trip_member::Entity as TripMember;
pub use super::user::Entity as User;
pub use super::vote::Entity as Vote;
