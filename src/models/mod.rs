pub mod activities;

pub use activities::{Activity, ActivityRow};
