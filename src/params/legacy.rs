use serde_json::{Map, Value};

/// What to do with an obsolete parameter found in a saved parameter set.
#[derive(Clone, Copy, Debug)]
pub enum LegacyAction {
    /// Move the value onto a current parameter, passing it through `transform`.
    Redirect {
        /// Current parameter name.
        target: &'static str,
        /// Conversion applied to the old value.
        transform: fn(Value) -> Value,
    },
    /// Accept the parameter and drop its value.
    Discard,
}

/// One row of the compatibility table.
#[derive(Clone, Copy, Debug)]
pub struct LegacyKnob {
    /// Obsolete parameter name.
    pub name: &'static str,
    /// How the old value is handled.
    pub action: LegacyAction,
}

fn same_value(v: Value) -> Value {
    v
}

/// Obsolete parameter names still accepted on load.
pub const LEGACY_KNOBS: &[LegacyKnob] = &[
    LegacyKnob {
        name: "full_format",
        action: LegacyAction::Redirect {
            target: "format",
            transform: same_value,
        },
    },
    LegacyKnob {
        name: "proxy_format",
        action: LegacyAction::Discard,
    },
];

/// Rewrite obsolete parameters in place so only current names remain.
///
/// A current parameter that is already present wins over a redirected one.
pub fn apply_legacy_knobs(knobs: &mut Map<String, Value>) {
    for legacy in LEGACY_KNOBS {
        let Some(value) = knobs.remove(legacy.name) else {
            continue;
        };
        match legacy.action {
            LegacyAction::Discard => {
                tracing::debug!(knob = legacy.name, "discarding obsolete knob");
            }
            LegacyAction::Redirect { target, transform } => {
                if knobs.contains_key(target) {
                    tracing::debug!(
                        knob = legacy.name,
                        target,
                        "obsolete knob shadowed by current knob"
                    );
                } else {
                    tracing::debug!(knob = legacy.name, target, "redirecting obsolete knob");
                    knobs.insert(target.to_string(), transform(value));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/legacy.rs"]
mod tests;
