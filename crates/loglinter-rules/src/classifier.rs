//! Decides which calls are logging calls.

use crate::policy::LogPolicy;
use loglinter_core::CallSite;

/// Classifies call sites by method name and receiver.
///
/// Classification is purely syntactic. A method named like a log level is a
/// logging call whatever its receiver's type, unless the receiver is a bare
/// identifier on the excluded list (`fmt.Errorf(..)`).
#[derive(Debug, Clone, Copy)]
pub struct CallClassifier<'p> {
    policy: &'p LogPolicy,
}

impl<'p> CallClassifier<'p> {
    /// Creates a classifier over `policy`.
    #[must_use]
    pub fn new(policy: &'p LogPolicy) -> Self {
        Self { policy }
    }

    /// Returns true if the message of `call` should be checked.
    #[must_use]
    pub fn is_checkable(&self, call: &CallSite<'_>) -> bool {
        if !self.policy.log_methods.contains(&*call.method) {
            return false;
        }

        call.receiver
            .ident()
            .map_or(true, |name| !self.policy.excluded_receivers.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loglinter_core::{Receiver, SourcePos};
    use std::borrow::Cow;

    fn call(method: &'static str, receiver: Receiver<'static>) -> CallSite<'static> {
        CallSite {
            method: Cow::Borrowed(method),
            receiver,
            args: Vec::new(),
            position: SourcePos::new(1, 1),
        }
    }

    fn ident(name: &'static str) -> Receiver<'static> {
        Receiver::Ident(Cow::Borrowed(name))
    }

    #[test]
    fn log_methods_are_checkable() {
        let policy = LogPolicy::default();
        let classifier = CallClassifier::new(&policy);
        assert!(classifier.is_checkable(&call("Info", ident("logger"))));
        assert!(classifier.is_checkable(&call("Errorw", ident("sugar"))));
        assert!(classifier.is_checkable(&call("Warn", Receiver::Expr)));
        assert!(classifier.is_checkable(&call("info", Receiver::None)));
    }

    #[test]
    fn unknown_methods_are_not() {
        let policy = LogPolicy::default();
        let classifier = CallClassifier::new(&policy);
        assert!(!classifier.is_checkable(&call("Println", ident("fmt"))));
        assert!(!classifier.is_checkable(&call("Sync", ident("logger"))));
        assert!(!classifier.is_checkable(&call("INFO", ident("logger"))));
    }

    #[test]
    fn excluded_receivers() {
        let policy = LogPolicy::default();
        let classifier = CallClassifier::new(&policy);
        assert!(!classifier.is_checkable(&call("Errorf", ident("fmt"))));
        assert!(!classifier.is_checkable(&call("Error", ident("errors"))));
        // only bare identifiers are excluded
        assert!(classifier.is_checkable(&call("Errorf", Receiver::Expr)));
    }

    #[test]
    fn custom_lists() {
        let mut policy = LogPolicy::default();
        policy.log_methods = ["Log".to_string()].into_iter().collect();
        policy.excluded_receivers.clear();
        let classifier = CallClassifier::new(&policy);
        assert!(classifier.is_checkable(&call("Log", ident("fmt"))));
        assert!(!classifier.is_checkable(&call("Info", ident("logger"))));
    }
}
