#[cfg(test)]
use serde::Serialize;

// This provides Eq for f64.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(test, derive(Serialize))]
pub struct JsNumber(pub f64);

impl PartialEq for JsNumber {
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() {
            return other.0.is_nan();
        };
        self.0.eq(&other.0)
    }
}

impl Eq for JsNumber {}
