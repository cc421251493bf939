// Core engine exports
pub mod matcher;
pub mod photos;
pub mod queue;
pub mod random;
pub mod session;

pub use matcher::{ChatHook, MatchController, LIKE_MATCH_PROBABILITY};
pub use photos::PhotoBrowser;
pub use queue::{CandidateQueue, QueueError};
pub use random::{FixedSequence, RandomSource, SeededRandom, ThreadRandom};
pub use session::{InteractionState, SwipeSession};
