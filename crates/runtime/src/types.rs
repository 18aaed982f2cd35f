//! Core signal identity type.

use std::borrow::Borrow;
use std::fmt;

/// Name of a signal in the circuit.
///
/// A latch with output `Q` exposes its delayed value under the primed
/// name `Q'`. The prime is part of the identity, so `Q` and `Q'` are
/// two independent signals in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignalId(pub String);

impl SignalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primed form of this signal, `Q` becoming `Q'`.
    pub fn primed(&self) -> SignalId {
        SignalId(format!("{}'", self.0))
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SignalId {
    fn from(s: &str) -> Self {
        SignalId(s.to_string())
    }
}

impl From<String> for SignalId {
    fn from(s: String) -> Self {
        SignalId(s)
    }
}

// Borrow contract: SignalId must hash and compare exactly like the
// inner String, which the derived impls on a single field guarantee.
impl Borrow<str> for SignalId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
