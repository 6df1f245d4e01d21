//! Anti-inspection guard
//!
//! Keyboard filtering and the window-size dev-tools heuristic are decided
//! here and serialized into the payload that `guard.js` evaluates, so the
//! browser applies exactly the rules this module classifies.

use serde::{Deserialize, Serialize};

use crate::config::{GuardConfig, KeyRuleConfig};

/// Shortest delay between `debugger` traps the page will run
pub const MIN_DEBUGGER_INTERVAL_MS: u32 = 100;

/// What the page does with an intercepted key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardAction {
    /// Let the browser handle it
    Allow,
    /// `preventDefault`
    Suppress,
    /// `preventDefault` and show the blocked message
    Block,
}

/// A key press as seen by the `keydown` listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// `KeyboardEvent.key`
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// A single key binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRule {
    pub key: String,
    /// Ctrl must be held
    pub ctrl: bool,
    /// Shift must be held
    pub shift: bool,
    pub ignore_case: bool,
    pub action: GuardAction,
}

impl KeyRule {
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if (self.ctrl && !event.ctrl) || (self.shift && !event.shift) {
            return false;
        }
        if self.ignore_case {
            self.key.eq_ignore_ascii_case(&event.key)
        } else {
            self.key == event.key
        }
    }
}

/// Keyboard shortcut filter
#[derive(Debug, Clone, Default)]
pub struct KeyGuard {
    rules: Vec<KeyRule>,
}

impl KeyGuard {
    /// Expand configured key groups into one rule per key
    pub fn from_config(groups: &[KeyRuleConfig]) -> Self {
        let rules = groups
            .iter()
            .flat_map(|group| {
                group.keys.iter().map(move |key| KeyRule {
                    key: key.clone(),
                    ctrl: group.ctrl,
                    shift: group.shift,
                    ignore_case: group.ignore_case,
                    action: group.action,
                })
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[KeyRule] {
        &self.rules
    }

    /// The most severe action among matching rules
    pub fn classify(&self, event: &KeyEvent) -> GuardAction {
        self.rules
            .iter()
            .filter(|rule| rule.matches(event))
            .map(|rule| rule.action)
            .max()
            .unwrap_or(GuardAction::Allow)
    }
}

/// Outer and inner window dimensions, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub outer_width: i64,
    pub inner_width: i64,
    pub outer_height: i64,
    pub inner_height: i64,
}

/// Docked dev tools shrink the viewport but not the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevToolsDetector {
    pub threshold: u32,
}

impl DevToolsDetector {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// True when either dimension's gap strictly exceeds the threshold
    pub fn is_open(&self, window: &WindowGeometry) -> bool {
        let limit = i64::from(self.threshold);
        window.outer_width - window.inner_width > limit
            || window.outer_height - window.inner_height > limit
    }
}

/// Everything `guard.js` needs, serialized under `window.__stackGuardConfig`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardPayload {
    pub block_context_menu: bool,
    pub rules: Vec<KeyRule>,
    pub detect_devtools: bool,
    pub threshold: u32,
    pub redirect_url: String,
    pub blocked_message: String,
    pub detected_message: String,
    pub debugger_trap: bool,
    pub debugger_interval_ms: u32,
}

/// The configured guard: classifier, detector and script payload
#[derive(Debug, Clone)]
pub struct GuardScript {
    config: GuardConfig,
    keys: KeyGuard,
    detector: DevToolsDetector,
}

impl GuardScript {
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            keys: KeyGuard::from_config(&config.key_rules),
            detector: DevToolsDetector::new(config.devtools_threshold),
            config: config.clone(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn keys(&self) -> &KeyGuard {
        &self.keys
    }

    pub fn detector(&self) -> &DevToolsDetector {
        &self.detector
    }

    pub fn cdn_script(&self) -> Option<&str> {
        self.config
            .cdn_script
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Trap interval for the page, never below `MIN_DEBUGGER_INTERVAL_MS`
    fn debugger_interval_ms(&self) -> u32 {
        let configured = self.config.debugger_interval_ms;
        if configured < MIN_DEBUGGER_INTERVAL_MS {
            tracing::warn!(
                "guard.debugger_interval_ms {} is below {}, using {}",
                configured,
                MIN_DEBUGGER_INTERVAL_MS,
                MIN_DEBUGGER_INTERVAL_MS
            );
            return MIN_DEBUGGER_INTERVAL_MS;
        }
        configured
    }

    pub fn payload(&self) -> GuardPayload {
        GuardPayload {
            block_context_menu: self.config.block_context_menu,
            rules: self.keys.rules().to_vec(),
            detect_devtools: self.config.detect_devtools,
            threshold: self.detector.threshold,
            redirect_url: self.config.redirect_url.clone(),
            blocked_message: self.config.blocked_message.clone(),
            detected_message: self.config.detected_message.clone(),
            debugger_trap: self.config.debugger_trap,
            debugger_interval_ms: self.debugger_interval_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_guard() -> KeyGuard {
        KeyGuard::from_config(&GuardConfig::default().key_rules)
    }

    #[test]
    fn test_view_source_save_print_are_suppressed() {
        let guard = default_guard();
        for key in ["u", "U", "s", "p", "Shift"] {
            assert_eq!(
                guard.classify(&KeyEvent::new(key).ctrl()),
                GuardAction::Suppress,
                "ctrl+{key}"
            );
        }
        // Without ctrl these are ordinary typing
        assert_eq!(guard.classify(&KeyEvent::new("u")), GuardAction::Allow);
    }

    #[test]
    fn test_devtools_shortcuts_are_blocked() {
        let guard = default_guard();
        assert_eq!(guard.classify(&KeyEvent::new("F12")), GuardAction::Block);
        for key in ["I", "J", "C"] {
            assert_eq!(
                guard.classify(&KeyEvent::new(key).ctrl().shift()),
                GuardAction::Block,
                "ctrl+shift+{key}"
            );
        }
    }

    #[test]
    fn test_inspector_keys_are_case_sensitive() {
        let guard = default_guard();
        // Shift held but the browser reported a lower-case key
        assert_eq!(
            guard.classify(&KeyEvent::new("i").ctrl().shift()),
            GuardAction::Allow
        );
        // Ctrl+Shift+I needs both modifiers
        assert_eq!(
            guard.classify(&KeyEvent::new("I").ctrl()),
            GuardAction::Allow
        );
    }

    #[test]
    fn test_most_severe_rule_wins() {
        let guard = default_guard();
        // Ctrl+Shift+S hits only the suppress group
        assert_eq!(
            guard.classify(&KeyEvent::new("S").ctrl().shift()),
            GuardAction::Suppress
        );
        // F12 with modifiers still opens dev tools
        assert_eq!(
            guard.classify(&KeyEvent::new("F12").ctrl()),
            GuardAction::Block
        );
    }

    #[test]
    fn test_rules_expand_per_key() {
        let guard = default_guard();
        assert_eq!(guard.rules().len(), 8);
        assert_eq!(guard.rules()[4].key, "F12");
    }

    #[test]
    fn test_detector_threshold_is_strict() {
        let detector = DevToolsDetector::new(100);
        let mut window = WindowGeometry {
            outer_width: 1280,
            inner_width: 1280,
            outer_height: 800,
            inner_height: 720,
        };
        assert!(!detector.is_open(&window));

        window.inner_width = 1180;
        assert!(!detector.is_open(&window), "a gap equal to the threshold is allowed");

        window.inner_width = 1179;
        assert!(detector.is_open(&window));

        window.inner_width = 1280;
        window.inner_height = 499;
        assert!(detector.is_open(&window));
    }

    #[test]
    fn test_detector_ignores_negative_gaps() {
        let detector = DevToolsDetector::new(100);
        let window = WindowGeometry {
            outer_width: 800,
            inner_width: 1600,
            outer_height: 600,
            inner_height: 1200,
        };
        assert!(!detector.is_open(&window));
    }

    #[test]
    fn test_payload() {
        let script = GuardScript::new(&GuardConfig::default());
        assert!(script.enabled());
        assert_eq!(
            script.cdn_script(),
            Some("https://cdn.jsdelivr.net/npm/disable-devtool@latest")
        );

        let json = serde_json::to_value(script.payload()).unwrap();
        assert_eq!(json["threshold"], 100);
        assert_eq!(json["redirectUrl"], "about:blank");
        assert_eq!(json["blockContextMenu"], true);
        assert_eq!(json["debuggerTrap"], false);
        assert_eq!(json["rules"][4]["key"], "F12");
        assert_eq!(json["rules"][4]["action"], "block");
        assert_eq!(json["rules"][0]["ignoreCase"], true);
    }

    #[test]
    fn test_blank_cdn_script_is_omitted() {
        let config = GuardConfig {
            cdn_script: Some("  ".to_string()),
            ..GuardConfig::default()
        };
        assert_eq!(GuardScript::new(&config).cdn_script(), None);
    }

    #[test]
    fn test_short_debugger_interval_is_raised() {
        let config = GuardConfig {
            debugger_interval_ms: 10,
            ..GuardConfig::default()
        };
        let payload = GuardScript::new(&config).payload();
        assert_eq!(payload.debugger_interval_ms, MIN_DEBUGGER_INTERVAL_MS);

        let config = GuardConfig {
            debugger_interval_ms: 250,
            ..GuardConfig::default()
        };
        assert_eq!(GuardScript::new(&config).payload().debugger_interval_ms, 250);
    }
}
