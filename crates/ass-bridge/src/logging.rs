//! Forwarding engine diagnostics into the player log

use log::Level;

/// Player log levels for the engine's 0 (fatal) through 7 (heavy trace)
/// diagnostic scale.
const LEVEL_MAP: [Level; 8] = [
    Level::Error, // 0: fatal
    Level::Warn,
    Level::Info,
    Level::Debug,
    Level::Debug,
    Level::Debug, // 5: level engines recommend for applications
    Level::Trace,
    Level::Trace, // 7: verbose debug
];

/// Map an engine diagnostic level onto the player log scale.
///
/// Levels past the engine scale land on `Debug`.
#[must_use]
pub fn engine_log_level(level: u32) -> Level {
    LEVEL_MAP
        .get(level as usize)
        .copied()
        .unwrap_or(Level::Debug)
}

/// Emit one engine diagnostic message to the player log, under the
/// `ass_engine` target.
///
/// Engine callbacks deliver messages without a trailing newline, but some
/// engines include one anyway; either way one clean record comes out. This
/// is the sink an engine's message callback plugs into.
pub fn forward_engine_message(level: u32, message: &str) {
    log::log!(
        target: "ass_engine",
        engine_log_level(level),
        "{}",
        message.trim_end_matches('\n')
    );
}
