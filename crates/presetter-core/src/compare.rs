//! Deep structural equality over JSON values
//!
//! The single redundancy test used by every reducer: a target value is
//! redundant exactly when it is structurally identical to the reference's
//! value. Arrays are order-sensitive, objects are key-order-insensitive,
//! and `null` is a value in its own right (absence is represented by
//! `Option::None` at the call sites, never by `Null`).

use serde_json::Value;

/// Structural equality over two JSON values.
///
/// No fuzzy matching: numbers in different representations (e.g. `2` vs
/// `2.0`) compare by serde_json `Number` semantics, and any coercion is the
/// caller's responsibility.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}
