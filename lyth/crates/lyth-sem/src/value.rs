//! Evaluated runtime values and the arithmetic `Add`/`Sub`/`Mul`/`Div`/
//! `Floor` lower to.
//!
//! `Div` always promotes to [`Value::Float`] (spec's Open Question: "prefer
//! float64 for Div"); the other operators preserve [`Value::Int`] when both
//! operands are `Int`. `Value::Name` is not an arithmetic operand at all —
//! it is the transient payload a `STORE`-context visit produces, carrying
//! the interned identifier an assignment is about to bind.

use std::fmt;

use lyth_util::error::LythErrorKind;
use lyth_util::Symbol;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Name(Symbol),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Name(sym) => write!(f, "{sym:?}"),
        }
    }
}

impl Value {
    fn as_f64(self) -> f64 {
        match self {
            Value::Int(n) => n as f64,
            Value::Float(f) => f,
            Value::Name(_) => unreachable!("Name is a STORE-context payload, never an operand"),
        }
    }

    fn promote(self, other: Value, int_op: fn(i64, i64) -> i64, float_op: fn(f64, f64) -> f64) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(int_op(a, b)),
            (a, b) => Value::Float(float_op(a.as_f64(), b.as_f64())),
        }
    }

    pub fn add(self, other: Value) -> Value {
        self.promote(other, |a, b| a + b, |a, b| a + b)
    }

    pub fn sub(self, other: Value) -> Value {
        self.promote(other, |a, b| a - b, |a, b| a - b)
    }

    pub fn mul(self, other: Value) -> Value {
        self.promote(other, |a, b| a * b, |a, b| a * b)
    }

    /// Real division, regardless of operand types.
    pub fn div(self, other: Value) -> Value {
        Value::Float(self.as_f64() / other.as_f64())
    }

    /// Integer floor division when both operands are `Int`, real-valued
    /// floor otherwise. Spec's error taxonomy has no dedicated division-by-
    /// zero kind, so an integer divide-by-zero falls to the catch-all
    /// `SyntaxError` rather than panicking on the underlying `i64::div`.
    pub fn floor_div(self, other: Value) -> Result<Value, LythErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => {
                a.checked_div(b).map(Value::Int).ok_or(LythErrorKind::SyntaxError)
            }
            (a, b) => Ok(Value::Float((a.as_f64() / b.as_f64()).floor())),
        }
    }
}
