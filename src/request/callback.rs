//! Callback delivery for spawned executions.

use crate::response::Outcome;
use crate::types::ApiStatus;
use crate::{Error, Result};
use tracing::warn;

/// Receives the outcome of a spawned execution. Exactly one method is called.
///
/// The failure branches default to reporting [`Error::Unhandled`], which
/// surfaces through the task's `JoinHandle`.
pub trait Callback<T>: Send + 'static {
    fn on_success(&mut self, result: T) -> Result<()>;

    fn on_unsuccessful(&mut self, http_code: u16, status: &ApiStatus) -> Result<()> {
        Err(unhandled_unsuccessful(http_code, status))
    }

    fn on_network_error(&mut self, error: &Error) -> Result<()> {
        Err(unhandled_network_error(error))
    }
}

fn unhandled_unsuccessful(http_code: u16, status: &ApiStatus) -> Error {
    warn!(http_code, status = %status, "unsuccessful response was not handled");
    Error::Unhandled {
        message: format!(
            "Unsuccessful response from API was not handled. Error code: {}",
            http_code
        ),
    }
}

fn unhandled_network_error(error: &Error) -> Error {
    warn!(error = %error, "network error was not handled");
    Error::Unhandled {
        message: format!(
            "Network error while contacting API was not handled: {}",
            error
        ),
    }
}

pub(crate) fn deliver<T, C>(outcome: Outcome<T>, callback: &mut C) -> Result<()>
where
    C: Callback<T> + ?Sized,
{
    match outcome {
        Outcome::Success(result) => callback.on_success(result),
        Outcome::Unsuccessful { http_code, status } => callback.on_unsuccessful(http_code, &status),
        Outcome::NetworkError(error) => callback.on_network_error(&error),
    }
}

type SuccessFn<T> = Box<dyn FnOnce(T) + Send>;
type FailureFn = Box<dyn FnOnce(u16, &ApiStatus) + Send>;
type NetworkErrorFn = Box<dyn FnOnce(&Error) + Send>;

/// Closure-based [`Callback`]. Any handler may be left out.
///
/// A missing success handler drops the result; a missing failure handler
/// makes the task finish with [`Error::Unhandled`].
pub struct Handlers<T> {
    on_success: Option<SuccessFn<T>>,
    on_failure: Option<FailureFn>,
    on_network_error: Option<NetworkErrorFn>,
}

impl<T> Default for Handlers<T> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_failure: None,
            on_network_error: None,
        }
    }
}

impl<T> Handlers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(mut self, f: impl FnOnce(T) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    pub fn on_failure(mut self, f: impl FnOnce(u16, &ApiStatus) + Send + 'static) -> Self {
        self.on_failure = Some(Box::new(f));
        self
    }

    pub fn on_network_error(mut self, f: impl FnOnce(&Error) + Send + 'static) -> Self {
        self.on_network_error = Some(Box::new(f));
        self
    }
}

impl<T: Send + 'static> Callback<T> for Handlers<T> {
    fn on_success(&mut self, result: T) -> Result<()> {
        if let Some(f) = self.on_success.take() {
            f(result);
        }
        Ok(())
    }

    fn on_unsuccessful(&mut self, http_code: u16, status: &ApiStatus) -> Result<()> {
        match self.on_failure.take() {
            Some(f) => {
                f(http_code, status);
                Ok(())
            }
            None => Err(unhandled_unsuccessful(http_code, status)),
        }
    }

    fn on_network_error(&mut self, error: &Error) -> Result<()> {
        match self.on_network_error.take() {
            Some(f) => {
                f(error);
                Ok(())
            }
            None => Err(unhandled_network_error(error)),
        }
    }
}
