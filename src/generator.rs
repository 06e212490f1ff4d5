//! Inverse transform: serializes a [`RequestModel`] back into curl command
//! text, suitable for the builder's "copy" action.

use std::fmt::Write;

use crate::RequestModel;

impl RequestModel {
    /// Renders the model as a single-line curl invocation.
    ///
    /// Headers are emitted in their stored insertion order and the `-d`
    /// segment is omitted entirely when the body is empty. Values are
    /// wrapped in single quotes; fidelity for values containing embedded
    /// single quotes is out of scope.
    pub fn to_curl(&self) -> String {
        let mut command = format!("curl '{}' -X {}", self.url, self.method);
        for (name, value) in &self.headers {
            let _ = write!(command, " -H '{name}: {value}'");
        }
        if !self.body.is_empty() {
            let _ = write!(command, " -d '{}'", self.body);
        }
        command
    }
}
