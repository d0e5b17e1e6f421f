pub mod messages;
pub mod navigation;

pub use messages::MessageDisplay;
pub use navigation::Navigable;
