//! Validation machinery shared by every schema.
//!
//! A [`Checker`] tracks the current [`FieldPath`] while a [`Validate`]
//! implementation walks a raw value. Every problem is recorded rather than
//! returned early, so one traversal serves both the first-error and the
//! all-errors entry points. Errors recorded inside a sequence element are
//! wrapped in [`ValidationError::Nested`] when the element is left.

use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationErrors, ValueKind};
use crate::path::FieldPath;

/// Knobs that change how strictly raw entries are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject object keys the schema does not declare. Off by default:
    /// unknown keys are dropped from the typed record.
    pub deny_unknown_fields: bool,
}

/// A type that can be built from a raw structured value.
pub trait Validate: Sized {
    /// Read `raw` at the checker's current path.
    ///
    /// Implementations must record at least one error on `cx` whenever they
    /// return `None`, and should keep going after a bad field so that every
    /// problem is reported.
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self>;
}

/// Path-tracking error collector passed through [`Validate::check`].
#[derive(Debug)]
pub struct Checker {
    path: FieldPath,
    errors: Vec<ValidationError>,
    options: ValidationOptions,
}

impl Checker {
    #[must_use]
    pub const fn new(options: ValidationOptions) -> Self {
        Self {
            path: FieldPath::root(),
            errors: Vec::new(),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Path of the value currently being checked.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn report(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record that the current field is absent.
    pub fn missing(&mut self) {
        let path = self.path.clone();
        self.report(ValidationError::MissingField { path });
    }

    /// Record that the current value is not of kind `expected`.
    pub fn mismatch(&mut self, expected: ValueKind, found: &Value) {
        let path = self.path.clone();
        self.report(ValidationError::TypeMismatch {
            path,
            expected,
            found: ValueKind::of(found),
        });
    }

    /// Record that the current value is outside `allowed`.
    pub fn enum_violation(&mut self, value: &str, allowed: &'static [&'static str]) {
        let path = self.path.clone();
        self.report(ValidationError::EnumViolation {
            path,
            value: value.to_string(),
            allowed,
        });
    }

    /// Run `f` with `name` appended to the current path.
    pub fn at_field<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push_field(name);
        let out = f(self);
        self.path.pop();
        out
    }

    /// Run `f` on sequence element `index`, wrapping anything it reports in
    /// [`ValidationError::Nested`].
    pub fn at_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push_index(index);
        let before = self.errors.len();
        let out = f(self);
        if self.errors.len() > before {
            let element = self.path.clone();
            let wrapped: Vec<ValidationError> = self
                .errors
                .split_off(before)
                .into_iter()
                .map(|error| ValidationError::nested(element.clone(), error))
                .collect();
            self.errors.extend(wrapped);
        }
        self.path.pop();
        out
    }

    /// Borrow `raw` as an object, recording a type mismatch otherwise.
    pub fn object<'v>(&mut self, raw: &'v Value) -> Option<&'v Map<String, Value>> {
        if let Value::Object(map) = raw {
            Some(map)
        } else {
            self.mismatch(ValueKind::Object, raw);
            None
        }
    }

    /// Check the required field `name` of `map` as a `T`.
    pub fn field<T: Validate>(&mut self, map: &Map<String, Value>, name: &str) -> Option<T> {
        self.at_field(name, |cx| {
            if let Some(value) = map.get(name) {
                T::check(value, cx)
            } else {
                cx.missing();
                None
            }
        })
    }

    /// In strict mode, record every key of `map` missing from `declared`.
    ///
    /// Returns `false` if anything was recorded.
    pub fn declared_fields_only(&mut self, map: &Map<String, Value>, declared: &[&str]) -> bool {
        if !self.options.deny_unknown_fields {
            return true;
        }

        let mut clean = true;
        for key in map.keys().filter(|key| !declared.contains(&key.as_str())) {
            let path = self.path.field(key);
            self.report(ValidationError::UnknownField { path });
            clean = false;
        }
        clean
    }

    /// Turn the outcome of a traversal into a result.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `None` but nothing was reported, which means a
    /// [`Validate`] implementation broke its contract.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        if let Some(errors) = ValidationErrors::new(self.errors) {
            return Err(errors);
        }
        match value {
            Some(value) => Ok(value),
            None => unreachable!("Validate::check returned None without reporting an error"),
        }
    }
}

/// Validate `raw` as a `T`, returning every problem found.
///
/// # Errors
///
/// Returns the full, non-empty list of problems in traversal order.
pub fn validate_with<T: Validate>(
    raw: &Value,
    options: ValidationOptions,
) -> Result<T, ValidationErrors> {
    let mut cx = Checker::new(options);
    let value = T::check(raw, &mut cx);
    cx.finish(value)
}

/// Validate `raw` as a `T` with default options, returning the first problem.
///
/// # Errors
///
/// Returns the first problem in traversal order, which follows field
/// declaration order and then sequence order.
pub fn validate<T: Validate>(raw: &Value) -> Result<T, ValidationError> {
    validate_with(raw, ValidationOptions::default()).map_err(ValidationErrors::into_first)
}

impl Validate for String {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        if let Value::String(text) = raw {
            Some(text.clone())
        } else {
            cx.mismatch(ValueKind::String, raw);
            None
        }
    }
}

impl Validate for bool {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        if let Value::Bool(flag) = raw {
            Some(*flag)
        } else {
            cx.mismatch(ValueKind::Boolean, raw);
            None
        }
    }
}

/// Sequences check every element, so one bad element does not hide another.
impl<T: Validate> Validate for Vec<T> {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        let Value::Array(items) = raw else {
            cx.mismatch(ValueKind::Array, raw);
            return None;
        };

        let mut out = Vec::with_capacity(items.len());
        let mut clean = true;
        for (index, item) in items.iter().enumerate() {
            match cx.at_index(index, |cx| T::check(item, cx)) {
                Some(value) => out.push(value),
                None => clean = false,
            }
        }
        clean.then_some(out)
    }
}
