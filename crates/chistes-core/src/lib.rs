//! Domain types and arithmetic for the chistes service.
//!
//! - [`joke`]: the stored joke record, its number, and upstream providers
//! - [`math`]: GCD/LCM and increment helpers behind the math endpoints
//! - [`error`]: CoreError enum

pub mod error;
pub mod joke;
pub mod math;

pub use error::CoreError;
pub use joke::{validate_text, Joke, JokeNumber, Provider};
pub use math::{gcd, increment, lcm, lcm_all};
