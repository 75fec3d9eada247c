// Analysis over an already-known skill list: role readiness and ATS overlap.
// Both are pure functions; handlers only shape requests and responses.

pub mod ats;
pub mod handlers;
pub mod readiness;
