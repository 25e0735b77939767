//! Logging capability injected into the factory.

use crate::parse::ParseFault;

/// Error-level sink for parse faults.
///
/// The factory invokes this exactly once per faulting `create` call and
/// never otherwise. Implementations must tolerate concurrent calls; the
/// factory itself holds no state between invocations.
pub trait FaultLogger {
    fn error(&self, fault: &ParseFault);
}

impl<L: FaultLogger> FaultLogger for &L {
    fn error(&self, fault: &ParseFault) {
        (**self).error(fault)
    }
}

/// Production sink backed by the `tracing` ecosystem.
///
/// Emits one error-level event per fault. The crate installs no subscriber;
/// the hosting layer owns that.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFaultLogger;

impl FaultLogger for TracingFaultLogger {
    fn error(&self, fault: &ParseFault) {
        tracing::error!(fault = %fault, "telemetry payload rejected");
    }
}
