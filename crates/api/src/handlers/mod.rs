pub mod destination;
pub mod trip;

use tripgenie_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a request DTO, mapping failures to a 400.
pub(crate) fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}
