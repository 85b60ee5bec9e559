//! Correlation ids
//!
//! Every CLI invocation gets a fresh [`RequestId`]. A caller driving several
//! invocations for one editing session may pass its own [`TraceId`] so the
//! errors and log lines of that session can be grouped.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Id of one request (one CLI invocation)
    RequestId
);

correlation_id!(
    /// Caller-supplied id shared by the requests of one editing session
    TraceId
);

impl RequestId {
    /// Fresh, time-ordered id (UUIDv7)
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

/// Ids attached to the errors and log events of one request
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
}

impl RequestContext {
    pub fn new(trace_id: Option<TraceId>) -> Self {
        Self {
            request_id: RequestId::generate(),
            trace_id,
        }
    }

    pub fn trace_id_str(&self) -> Option<&str> {
        self.trace_id.as_ref().map(TraceId::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_request_ids_differ() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert_eq!(Uuid::parse_str(a.as_str()).unwrap().get_version_num(), 7);
    }

    #[test]
    fn test_trace_id_parses_verbatim() {
        let trace: TraceId = "session-9".parse().unwrap();
        assert_eq!(trace.to_string(), "session-9");

        let ctx = RequestContext::new(Some(trace));
        assert_eq!(ctx.trace_id_str(), Some("session-9"));
        assert_eq!(RequestContext::new(None).trace_id_str(), None);
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = RequestId::from("abc".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
