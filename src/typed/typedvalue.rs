use std::any::Any;

/// Type-erased slot holding one stored dictionary value.
pub struct TypedValue(Box<dyn Any + Send + Sync>);

impl TypedValue {
    pub fn from_value<V: Any + Send + Sync>(value: V) -> Self {
        Self(Box::new(value))
    }

    #[must_use]
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.0.as_ref().downcast_ref::<V>()
    }
}
