//! Match state and transitions

mod session;

pub use session::{Attempt, Phase, Player, Session, SubmitError, Submission};
