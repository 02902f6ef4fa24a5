pub mod phone;
pub mod birthday;
pub mod record;

// Re-exports for convenience
pub use phone::PhoneNumber;
pub use birthday::Birthday;
pub use record::Record;
