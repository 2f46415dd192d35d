use std::{any::Any, fmt, sync::Arc};

/// A host-provided resolve or subscribe function, carried by reference.
///
/// The combine pipeline never invokes the function. It only moves the handle
/// around, and compares handles by pointer identity.
#[derive(Clone)]
pub struct FnHandle(Arc<dyn Any + Send + Sync>);

impl FnHandle {
    pub fn new<T: Send + Sync + 'static>(function: T) -> Self {
        FnHandle(Arc::new(function))
    }

    /// Pointer identity: do both handles refer to the same host function?
    pub fn ptr_eq(&self, other: &FnHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl PartialEq for FnHandle {
    fn eq(&self, other: &FnHandle) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for FnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHandle(..)")
    }
}

/// A raw syntax node from whatever parser produced the source graph, carried
/// by reference and never inspected.
#[derive(Clone)]
pub struct AstNodeHandle(Arc<dyn Any + Send + Sync>);

impl AstNodeHandle {
    pub fn new<T: Send + Sync + 'static>(node: T) -> Self {
        AstNodeHandle(Arc::new(node))
    }

    pub fn ptr_eq(&self, other: &AstNodeHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl PartialEq for AstNodeHandle {
    fn eq(&self, other: &AstNodeHandle) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for AstNodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AstNodeHandle(..)")
    }
}
