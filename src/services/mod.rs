mod crypto;
mod fast;
mod generator;
mod math;
mod rid;

pub use crypto::CryptoGenerator;
pub use fast::FastGenerator;
pub use generator::RidGenerator;
#[cfg(test)]
pub use generator::MockRidGenerator;
pub use math::MathGenerator;
pub use rid::{RidService, SharedGenerator};
