use anyhow::Result;
use buildcheck_core::Problem;
use thiserror::Error;

/// Error type for user cancellation (Ctrl+C or ESC)
#[derive(Debug, Error)]
#[error("")]
pub struct UserCancelled;

/// Dependency injection interface for interactive prompts.
///
/// Allows commands to accept `&dyn Prompter` for testability. Production code
/// uses `InquirePrompter`, tests use mocks with predetermined responses.
pub trait Prompter: Send + Sync {
    /// # Errors
    /// Returns error if user cancels the selection or interaction fails.
    fn multi_select<'a>(
        &self,
        message: &str,
        options: Vec<&'a Problem>,
        defaults: Vec<usize>,
    ) -> Result<Vec<&'a Problem>>;

    /// # Errors
    /// Returns error if user cancels the confirmation or interaction fails.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Helper function for handling inquire result errors
fn handle_inquire_result<T>(result: Result<T, inquire::InquireError>) -> Result<T> {
    match result {
        Ok(v) => Ok(v),
        Err(
            inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted,
        ) => Err(UserCancelled.into()),
        Err(e) => Err(e.into()),
    }
}

pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn multi_select<'a>(
        &self,
        message: &str,
        options: Vec<&'a Problem>,
        defaults: Vec<usize>,
    ) -> Result<Vec<&'a Problem>> {
        handle_inquire_result(
            inquire::MultiSelect::new(message, options)
                .with_default(&defaults)
                .prompt(),
        )
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        handle_inquire_result(inquire::Confirm::new(message).with_default(true).prompt())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_cancelled_maps_from_inquire() {
        let result: Result<bool> = handle_inquire_result::<bool>(Err(
            inquire::InquireError::OperationCanceled,
        ));
        assert!(result.unwrap_err().downcast_ref::<UserCancelled>().is_some());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let result: Result<bool> = handle_inquire_result::<bool>(Err(
            inquire::InquireError::NotTTY,
        ));
        let error = result.unwrap_err();
        assert!(error.downcast_ref::<UserCancelled>().is_none());
    }
}
