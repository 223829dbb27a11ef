mod admin_user;
mod catalogue;
mod schedule;
mod user;
mod waitlist;
