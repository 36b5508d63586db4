pub mod achievement;
pub mod announcement;
pub mod contact;
pub mod event;
pub mod news;
pub mod organization;
pub mod statistics;
pub mod subscriber;
pub mod user;

pub use achievement::*;
pub use announcement::*;
pub use contact::*;
pub use event::*;
pub use news::*;
pub use organization::*;
pub use statistics::*;
pub use subscriber::*;
pub use user::*;
