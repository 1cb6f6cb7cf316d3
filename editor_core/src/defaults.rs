//! Built-in content the editor falls back to when storage holds nothing.

use card_model::{ActionDescriptor, ParameterDescriptor};

/// The standard world parameters plus the introduction flag. All are system
/// parameters: the editing surface may rename them but never delete them.
pub fn default_parameters() -> Vec<ParameterDescriptor> {
    vec![
        ParameterDescriptor::value("Environment").system(),
        ParameterDescriptor::value("People").system(),
        ParameterDescriptor::value("Security").system(),
        ParameterDescriptor::value("Money").system(),
        ParameterDescriptor::flag("Introduction Complete").system(),
    ]
}

/// The two swipe directions.
pub fn default_actions() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::named("Left"),
        ActionDescriptor::named("Right"),
    ]
}
