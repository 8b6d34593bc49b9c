use crate::errors::EntropyError;
use crate::utils::entropy::unwrap_or_exit;

#[cfg_attr(test, mockall::automock)]
pub trait RidGenerator {
    /// Generates an identifier of `n` alphabet symbols
    ///
    /// ### Arguments
    /// * `n` - The number of symbols to produce
    ///
    /// ### Returns
    /// * `Result<String>` - Exactly `n` characters from `[A-Za-z0-9]`
    ///
    /// ### Errors
    /// * `EntropyError` - If the secure random source fails while seeding or drawing
    fn try_generate(&self, n: usize) -> Result<String, EntropyError>;

    /// Like [`RidGenerator::try_generate`], but terminates the process when
    /// the secure random source fails
    fn generate(&self, n: usize) -> String {
        unwrap_or_exit(self.try_generate(n))
    }
}
