//! Screen views.
//!
//! Pure functions from state to elements. The navigation chrome (search bar,
//! bottom navigation) is assembled around these in `App::view`.

mod compose;
mod contact;
mod drugs;
mod messages;
mod posts;
mod profile;

pub use compose::view_compose;
pub use contact::view_contact;
pub use drugs::view_drugs;
pub use messages::view_messages;
pub use posts::view_posts;
pub use profile::view_profile;
