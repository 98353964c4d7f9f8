use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Result codes carried by the response envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultCode;

impl ResultCode {
    pub const SUCCESS: i32 = 20000;
    pub const ERROR: i32 = 20001;
}

/// Uniform response envelope: `{success, code, message, data}`.
///
/// ```
/// use common::types::R;
/// let r = R::ok().data("id", "42");
/// assert!(r.success);
/// assert_eq!(r.code, 20000);
/// assert_eq!(r.data["id"], "42");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct R {
    pub success: bool,
    pub code: i32,
    pub message: String,
    pub data: Map<String, Value>,
}

impl R {
    pub fn ok() -> Self {
        Self { success: true, code: ResultCode::SUCCESS, message: "success".into(), data: Map::new() }
    }

    pub fn error() -> Self {
        Self { success: false, code: ResultCode::ERROR, message: "failure".into(), data: Map::new() }
    }

    pub fn code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Insert one named payload entry. Values that fail to serialize are stored as null.
    pub fn data(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.data.insert(key.into(), value);
        self
    }

    pub fn data_map(mut self, map: Map<String, Value>) -> Self {
        self.data = map;
        self
    }
}
