pub mod session;

pub use session::{Advance, Phase, PreparedQuestion, QuizSession};
