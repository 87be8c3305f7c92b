mod env;
pub use env::APP_ENV;

mod error;
pub use error::AppError;

mod shutdown_signal;
pub use shutdown_signal::shutdown_signal;

mod state;
pub use state::AppState;
