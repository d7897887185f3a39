//! Viewport aggregate: value objects, bounds/Y-range services, easing and
//! gesture math. Nothing here touches the DOM.

pub mod animation;
pub mod gestures;
pub mod services;
pub mod value_objects;

pub use animation::*;
pub use gestures::*;
pub use services::*;
pub use value_objects::*;
