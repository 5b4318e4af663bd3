//! Translator implementations

mod catalog;

pub use catalog::MessageCatalog;
