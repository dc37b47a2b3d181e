use serde::Deserialize;

/// A single named reading as reported by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reading {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
impl Reading {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One polled snapshot of the remote system. Replaced wholesale on every
/// successful poll, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SystemState {
    #[serde(default)]
    pub temperatures: Vec<Reading>,
    #[serde(default)]
    pub pressure: Vec<Reading>,
}
