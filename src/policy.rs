use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceMode {
    NewInstance,
    ReuseExisting,
}

/// Pure launch decision. Single-instance membership wins unconditionally,
/// even over `always_new_window`; every other input combination spawns a
/// fresh instance.
pub fn decide_instance_mode(
    display_name: &str,
    single_instance: &HashSet<String>,
    _always_new_window: bool,
) -> InstanceMode {
    if single_instance.contains(display_name) {
        return InstanceMode::ReuseExisting;
    }

    // Both the always-new-window flag and the default resolve to a fresh
    // instance today; the flag stays in the signature for the callers.
    InstanceMode::NewInstance
}
