pub mod chat;
pub mod dashboard;
pub mod geo;
pub mod matching;
pub mod notifications;
pub mod profiles;
pub mod rides;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
