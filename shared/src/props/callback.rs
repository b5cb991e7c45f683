use std::{fmt, rc::Rc};

use serde_json::Value;

/// A locally-held event handler.
///
/// Handlers never cross the boundary: the host only learns that one exists.
/// Two `Callback`s are equal only when they share the same allocation.
#[derive(Clone)]
pub struct Callback {
    inner: Rc<dyn Fn(Option<&Value>)>,
}

impl Callback {
    pub fn new(handler: impl Fn(Option<&Value>) + 'static) -> Self {
        Self {
            inner: Rc::new(handler),
        }
    }

    pub fn call(&self, payload: Option<&Value>) {
        (self.inner)(payload)
    }

    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.inner) as *const ())
    }
}
