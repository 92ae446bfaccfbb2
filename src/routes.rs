//! Route constants for the call-signaling HTTP surface.
//!
//! The calling platform is configured with these paths at deployment time;
//! changing them breaks the platform's callback registration.

/// Prefix under which all call-signaling callbacks arrive.
pub const CALL_SIGNALING_PREFIX: &str = "/api/calling";
/// Callback route for a new incoming call.
pub const INCOMING_CALL_ROUTE: &str = "/api/calling";
/// Callback route for notifications on an existing call.
pub const NOTIFICATION_ROUTE: &str = "/api/calling/notification";
/// Liveness probe route.
pub const HEALTH_ROUTE: &str = "/api/calling/health";
