/// The only runtime type. Truth values are encoded as [`TRUE`] and [`FALSE`].
pub type Value = i64;

pub const TRUE: Value = 1;
pub const FALSE: Value = 0;

/// Initial value of a variable declared without an initializer.
pub const DEFAULT_VALUE: Value = 0;

/// Conditions and loops treat every non-zero value as true.
pub fn is_truthy(value: Value) -> bool {
    value != FALSE
}

pub fn from_bool(value: bool) -> Value {
    if value { TRUE } else { FALSE }
}
