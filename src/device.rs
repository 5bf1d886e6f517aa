//! Touch-device detection
//!
//! Hosts consult this before mounting the overlay at all: a keyboard-equipped
//! desktop should never see touch controls. The structured capability hint is
//! preferred; where the host cannot provide one, a user-agent token match is
//! the fallback heuristic.

/// Tokens whose presence in a user-agent string marks a touch-first device
const MOBILE_UA_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// What the host knows about the device it runs on
#[derive(Debug, Clone, Default)]
pub struct DeviceProbe {
    /// Structured "is mobile" capability hint, when the host supports it
    pub structured_mobile: Option<bool>,
    /// Raw user-agent string for the fallback heuristic
    pub user_agent: String,
}

impl DeviceProbe {
    pub fn new(structured_mobile: Option<bool>, user_agent: impl Into<String>) -> Self {
        Self {
            structured_mobile,
            user_agent: user_agent.into(),
        }
    }

    /// Whether the overlay should be mounted on this device
    pub fn is_mobile(&self) -> bool {
        if self.structured_mobile == Some(true) {
            return true;
        }
        let ua = self.user_agent.to_lowercase();
        MOBILE_UA_TOKENS.iter().any(|token| ua.contains(token))
    }
}
