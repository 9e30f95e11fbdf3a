//! Player session: the single signed-in profile and its high score.
//!
//! Sign-in is mocked: any email/password pair is accepted and produces a
//! fresh profile. The profile is persisted as one JSON record so the player
//! stays signed in across restarts until they log out.

pub mod pending;
pub mod storage;
pub mod store;
pub mod types;

pub use pending::*;
pub use storage::*;
pub use store::*;
pub use types::*;
