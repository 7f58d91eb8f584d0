//! Nullable infrastructure for deterministic testing.
//!
//! Every capability the workspace consumes (biometric matcher, reference
//! fetcher, master data, id generation, packet creation, storage, upload)
//! is a trait. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be told to fail
//! - Record how they were called
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod fetcher;
pub mod matcher;
pub mod registration;

pub use fetcher::NullIdInfoFetcher;
pub use matcher::{NullBioMatcher, RecordedMatch};
pub use registration::{
    LookupKind, NullMasterData, NullPacketCreator, NullPacketServices, NullPacketStorage,
    NullPacketUploader, NullRidGenerator,
};
