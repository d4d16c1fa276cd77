//! Process-wide fault reporting for the emulation core.
//!
//! Emulated software pokes at unmapped addresses, illegal opcodes, and
//! unimplemented peripheral modes all the time; none of that may take the
//! emulator down unless the host asks for it. Every reporting site here
//! returns to its caller, which continues with a conservative value (reads
//! yield 0, writes are dropped, illegal opcodes cost one cycle).

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// Reaction to a reported emulation fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Swallow the report.
    Ignore,
    /// Log every report.
    Log,
    /// Log each distinct message text once.
    LogOnce,
    /// Panic on the first report. Debug/CI use only.
    Fail,
}

pub const DEFAULT_POLICY: ErrorPolicy = ErrorPolicy::LogOnce;

static POLICY: OnceLock<ErrorPolicy> = OnceLock::new();
static SEEN: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Select the process-wide policy. Must be called before stepping begins;
/// the first call wins and later calls are ignored.
pub fn set_policy(policy: ErrorPolicy) {
    let _ = POLICY.set(policy);
}

pub fn policy() -> ErrorPolicy {
    POLICY.get().copied().unwrap_or(DEFAULT_POLICY)
}

/// Forget which messages have already been logged under `LogOnce`.
pub fn reset() {
    if let Some(seen) = SEEN.get() {
        seen.lock().unwrap().clear();
    }
}

/// Bus access outside every mapped range.
pub fn unmapped(details: fmt::Arguments) {
    report("unmapped: ", details);
}

/// Legal bus access with no meaningful semantics (ROM writes, the combined
/// VIA+RAM window, and the like).
pub fn undefined(details: fmt::Arguments) {
    report("undefined: ", details);
}

/// Illegal opcode or postbyte encoding.
pub fn illegal(details: fmt::Arguments) {
    report("illegal: ", details);
}

/// Valid but unimplemented hardware mode.
pub fn unsupported(details: fmt::Arguments) {
    report("unsupported: ", details);
}

fn report(prefix: &str, details: fmt::Arguments) {
    match policy() {
        ErrorPolicy::Ignore => {}
        ErrorPolicy::Log => log::error!("{prefix}{details}"),
        ErrorPolicy::LogOnce => {
            let message = format!("{prefix}{details}");
            let seen = SEEN.get_or_init(|| Mutex::new(HashSet::new()));
            if seen.lock().unwrap().insert(message.clone()) {
                log::error!("{message}");
            }
        }
        ErrorPolicy::Fail => panic!("{prefix}{details}"),
    }
}
