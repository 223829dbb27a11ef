pub use super::admin_user::Entity as AdminUser;
pub use super::gallery::Entity as Gallery;
pub use super::game::Entity as Game;
pub use super::review::Entity as Review;
pub use super::schedule::Entity as Schedule;
pub use super::schedule_game::Entity as ScheduleGame;
pub use super::user::Entity as User;
pub use super::waitlist::Entity as Waitlist;
