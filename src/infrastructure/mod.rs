pub mod dom;
pub mod event_utils;
pub mod scheduling;
pub mod services;

pub use scheduling::{AnimationFrameScheduler, ManualFrameScheduler};
