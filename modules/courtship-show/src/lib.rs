pub mod director;
pub mod present;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;

pub use director::Director;
pub use present::ConsolePresenter;
pub use traits::TextGenerator;
