use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A host-supplied capability shared with components as a prop.
///
/// Dioxus props must be `Clone + PartialEq`; trait objects are neither, so
/// capabilities travel behind an `Rc` compared by pointer identity. Two
/// handles are equal only when they point at the same instance.
pub struct Injected<T: ?Sized>(Rc<T>);

impl<T: ?Sized> Injected<T> {
    pub fn new(inner: Rc<T>) -> Self {
        Self(inner)
    }

    pub fn as_rc(&self) -> &Rc<T> {
        &self.0
    }
}

impl<T: ?Sized> Clone for Injected<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Injected<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Injected<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Rc<T>> for Injected<T> {
    fn from(inner: Rc<T>) -> Self {
        Self(inner)
    }
}

impl<T: ?Sized> fmt::Debug for Injected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Injected({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}
