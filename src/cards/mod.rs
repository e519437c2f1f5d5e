pub mod basic;
pub mod codec;

pub use basic::{Card, Rank, Suit};
pub use codec::{decode, CardDescriptor, CardError};
