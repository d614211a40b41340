//! Ready-made key functions.

use serde::Serialize;
use serde_json::Value;

/// Key function that reads the top-level field `name` of any serializable record.
///
/// String fields are used as-is; numbers, booleans and nested values use their
/// JSON text. A missing field (or a record that does not serialize to an
/// object) maps to the empty string, so the function is total.
///
/// ```
/// use grouper::{Grouper, keys::by_field};
/// use serde::Serialize;
///
/// #[derive(Clone, Serialize)]
/// struct Order { region: String, qty: u32 }
///
/// let orders = vec![
///     Order { region: "eu".into(), qty: 2 },
///     Order { region: "us".into(), qty: 1 },
///     Order { region: "eu".into(), qty: 4 },
/// ];
/// let mut g = Grouper::new(&orders).unwrap();
/// let indices = g.group_by(by_field("region"));
/// assert_eq!(g.groups(), ["eu", "us"]);
/// assert_eq!(indices, vec![vec![0, 2], vec![1]]);
/// ```
pub fn by_field<T: Serialize>(name: &str) -> impl Fn(&T) -> String + use<T> {
    let name = name.to_string();
    move |record: &T| match serde_json::to_value(record) {
        Ok(Value::Object(mut map)) => match map.remove(&name) {
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        },
        _ => String::new(),
    }
}
