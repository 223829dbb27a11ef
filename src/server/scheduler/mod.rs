//! Background jobs run on the cron scheduler.

pub mod waitlist_sweep;
