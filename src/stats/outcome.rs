//! Typed statistic results and fault isolation.
//!
//! Every statistic returns an [`Outcome`] so the caller can tell apart
//! "the selection had no rows" from "the computation failed". Both collapse
//! to the documented empty shape with [`Outcome::into_value`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{ChatstatsError, Result};

/// Result of one statistic.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The statistic was computed.
    Ready(T),
    /// The selection had no rows.
    Empty,
    /// The statistic could not be computed.
    Failed(ChatstatsError),
}

impl<T> Outcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Returns the computed value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&ChatstatsError> {
        match self {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the computed value, keeping `Empty` and `Failed` as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ready(v) => Outcome::Ready(f(v)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(e) => Outcome::Failed(e),
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Returns the value, or the empty-shape default for `Empty` and `Failed`.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Ready(v) => v,
            Outcome::Empty | Outcome::Failed(_) => T::default(),
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Outcome::Ready(v) => {
                let mut s = serializer.serialize_struct("Outcome", 2)?;
                s.serialize_field("status", "ready")?;
                s.serialize_field("data", v)?;
                s.end()
            }
            Outcome::Empty => {
                let mut s = serializer.serialize_struct("Outcome", 1)?;
                s.serialize_field("status", "empty")?;
                s.end()
            }
            Outcome::Failed(e) => {
                let mut s = serializer.serialize_struct("Outcome", 2)?;
                s.serialize_field("status", "failed")?;
                s.serialize_field("error", &e.to_string())?;
                s.end()
            }
        }
    }
}

/// Runs `f`, turning errors and panics into [`Outcome::Failed`].
///
/// Failures are logged under the statistic's name.
pub(crate) fn isolate<T>(statistic: &'static str, f: impl FnOnce() -> Result<T>) -> Outcome<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Outcome::Ready(value),
        Ok(Err(e)) => {
            log::warn!("{statistic}: {e}");
            Outcome::Failed(e)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::warn!("{statistic} panicked: {message}");
            Outcome::Failed(ChatstatsError::internal(statistic, message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_value_defaults() {
        assert_eq!(Outcome::Ready(3usize).into_value(), 3);
        assert_eq!(Outcome::<usize>::Empty.into_value(), 0);
        let failed: Outcome<Vec<u8>> = Outcome::Failed(ChatstatsError::NoMarkers);
        assert!(failed.into_value().is_empty());
    }

    #[test]
    fn test_isolate_ok() {
        let outcome = isolate("ok", || Ok(5));
        assert_eq!(outcome.value(), Some(&5));
    }

    #[test]
    fn test_isolate_error() {
        let outcome: Outcome<u8> = isolate("err", || Err(ChatstatsError::stop_words_missing()));
        assert!(outcome.is_failed());
        assert!(outcome.error().unwrap().is_resource());
    }

    #[test]
    fn test_isolate_panic() {
        let outcome: Outcome<u8> = isolate("boom", || panic!("kaboom"));
        let err = outcome.error().unwrap();
        assert!(err.is_internal());
        assert!(err.to_string().contains("kaboom"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_map() {
        assert_eq!(Outcome::Ready(2).map(|v| v * 2).value(), Some(&4));
        assert!(Outcome::<u8>::Empty.map(|v| v + 1).is_empty());
    }

    #[test]
    fn test_serialize() {
        let ready = serde_json::to_value(Outcome::Ready(1)).unwrap();
        assert_eq!(ready["status"], "ready");
        assert_eq!(ready["data"], 1);

        let empty = serde_json::to_value(Outcome::<u8>::Empty).unwrap();
        assert_eq!(empty["status"], "empty");

        let failed = serde_json::to_value(Outcome::<u8>::Failed(ChatstatsError::NoMarkers)).unwrap();
        assert_eq!(failed["status"], "failed");
        assert!(failed["error"].as_str().unwrap().contains("markers"));
    }
}
