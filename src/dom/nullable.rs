//! Tri-state property containers.

/// A property value that may not have been set.
///
/// The container alone decides whether a value is set: a `NullableValue<String>`
/// holding `""` is set (to empty), while a fresh container is unset even though
/// `get()` reports the type's default.
#[derive(Debug, Clone, PartialEq)]
pub struct NullableValue<T> {
    value: Option<T>,
}

impl<T> NullableValue<T> {
    /// Create an unset container.
    pub const fn unset() -> Self {
        Self { value: None }
    }

    /// Create a container holding `value`.
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Store a value, returning the previous one if any.
    pub fn set(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Return to the unset state, returning the previous value if any.
    pub fn reset(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Check if no value was ever set (or it was reset).
    pub fn is_unset(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the stored value.
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutably borrow the stored value.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Convert into a plain `Option`.
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T: Clone + Default> NullableValue<T> {
    /// The stored value, or the type's default when unset.
    ///
    /// The result alone cannot tell "unset" from "set to the default";
    /// use [`is_unset`](Self::is_unset) for that.
    pub fn get(&self) -> T {
        self.value.clone().unwrap_or_default()
    }
}

impl<T> Default for NullableValue<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<Option<T>> for NullableValue<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

/// Check a possibly absent container for "nothing there".
///
/// True when `value` itself is absent or when the container is unset. Works
/// the same for every wrapped type.
pub fn is_unset_or_empty<T>(value: Option<&NullableValue<T>>) -> bool {
    value.map_or(true, NullableValue::is_unset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Unit};

    #[test]
    fn test_unset_is_not_default() {
        let mut text: NullableValue<String> = NullableValue::unset();
        assert!(text.is_unset());
        assert_eq!(text.get(), "");

        text.set(String::new());
        assert!(!text.is_unset());
        assert_eq!(text.get(), "");
    }

    #[test]
    fn test_default_value_can_be_set() {
        let mut color = NullableValue::unset();
        color.set(Color::default());
        assert!(!color.is_unset());
        assert_eq!(color.get(), Color::default());

        let zero = NullableValue::new(Unit::default());
        assert!(!is_unset_or_empty(Some(&zero)));
    }

    #[test]
    fn test_reset_returns_previous() {
        let mut unit = NullableValue::new(Unit::from_point(3.0));
        assert_eq!(unit.reset(), Some(Unit::from_point(3.0)));
        assert!(unit.is_unset());
        assert_eq!(unit.reset(), None);
    }

    #[test]
    fn test_is_unset_or_empty_absent() {
        assert!(is_unset_or_empty::<String>(None));
        assert!(is_unset_or_empty(Some(&NullableValue::<String>::unset())));
        assert!(!is_unset_or_empty(Some(&NullableValue::new("x".to_string()))));
    }
}
