//! Platform helpers
//!
//! Pure decisions about browser input that can be tested on the host. The
//! event wiring itself lives in the wasm entry point.

use crate::settings::TouchInput;

/// `KeyboardEvent.code` values that count as a press
pub const PRESS_KEYS: [&str; 2] = ["Space", "ArrowUp"];

/// User-agent fragments that mark a phone or tablet
const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Whether a key-down with this `code` is a press
pub fn key_triggers_press(code: &str) -> bool {
    PRESS_KEYS.contains(&code)
}

/// User-agent sniff for touch devices
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|agent| ua.contains(agent))
}

/// Whether touch-start should be wired up
pub fn touch_enabled(setting: TouchInput, user_agent: &str) -> bool {
    match setting {
        TouchInput::Auto => is_mobile_user_agent(user_agent),
        TouchInput::Always => true,
        TouchInput::Never => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

    #[test]
    fn test_press_keys() {
        assert!(key_triggers_press("Space"));
        assert!(key_triggers_press("ArrowUp"));
        assert!(!key_triggers_press("ArrowDown"));
        assert!(!key_triggers_press(" "));
    }

    #[test]
    fn test_mobile_sniff() {
        assert!(is_mobile_user_agent(IPHONE));
        assert!(is_mobile_user_agent(ANDROID));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!is_mobile_user_agent(DESKTOP));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn test_touch_setting() {
        assert!(touch_enabled(TouchInput::Auto, IPHONE));
        assert!(!touch_enabled(TouchInput::Auto, DESKTOP));
        assert!(touch_enabled(TouchInput::Always, DESKTOP));
        assert!(!touch_enabled(TouchInput::Never, ANDROID));
    }
}
