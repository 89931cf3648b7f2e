use core::fmt::{self, Debug};
use std::{cell::RefCell, convert::Infallible, rc::Rc};

/// The container views are mounted into.
///
/// The router only ever clears the outlet and then appends exactly one
/// node, once per mounted navigation.
pub trait Outlet: 'static {
    type Node: 'static;
    type Error: Debug;

    /// Removes every child.
    fn clear(&self) -> Result<(), Self::Error>;

    /// Appends `node` as the last child.
    fn append(&self, node: Self::Node) -> Result<(), Self::Error>;
}

/// An outlet that keeps its children in memory. Clones share the same
/// children.
pub struct MemoryOutlet<N>(Rc<RefCell<Vec<N>>>);

impl<N> Clone for MemoryOutlet<N> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<N> Default for MemoryOutlet<N> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<N: Debug> Debug for MemoryOutlet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemoryOutlet").field(&self.0.borrow()).finish()
    }
}

impl<N> MemoryOutlet<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().len()
    }

    /// Runs `fun` with a view of the current children.
    pub fn with_children<T>(&self, fun: impl FnOnce(&[N]) -> T) -> T {
        fun(&self.0.borrow())
    }
}

impl<N: Clone> MemoryOutlet<N> {
    /// A copy of the first child, which is the mounted view once the router
    /// has mounted anything.
    pub fn first(&self) -> Option<N> {
        self.0.borrow().first().cloned()
    }
}

impl<N: 'static> Outlet for MemoryOutlet<N> {
    type Node = N;
    type Error = Infallible;

    fn clear(&self) -> Result<(), Self::Error> {
        self.0.borrow_mut().clear();
        Ok(())
    }

    fn append(&self, node: Self::Node) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(node);
        Ok(())
    }
}

#[cfg(feature = "browser")]
mod element {
    use super::Outlet;
    use wasm_bindgen::JsValue;
    use web_sys::Element;

    /// A DOM element used as the outlet.
    #[derive(Clone, Debug)]
    pub struct ElementOutlet(Element);

    impl ElementOutlet {
        pub fn new(element: Element) -> Self {
            Self(element)
        }

        /// Finds the outlet element by its `id` attribute.
        pub fn by_id(id: &str) -> Result<Self, JsValue> {
            crate::window()?
                .document()
                .and_then(|document| document.get_element_by_id(id))
                .map(Self)
                .ok_or_else(|| {
                    JsValue::from_str(&format!("no element with id `{id}`"))
                })
        }

        pub fn element(&self) -> &Element {
            &self.0
        }
    }

    impl Outlet for ElementOutlet {
        type Node = Element;
        type Error = JsValue;

        fn clear(&self) -> Result<(), Self::Error> {
            while let Some(child) = self.0.first_child() {
                self.0.remove_child(&child)?;
            }
            Ok(())
        }

        fn append(&self, node: Self::Node) -> Result<(), Self::Error> {
            self.0.append_child(&node).map(drop)
        }
    }
}

#[cfg(feature = "browser")]
pub use element::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_children() {
        let outlet = MemoryOutlet::new();
        let other = outlet.clone();
        outlet.append("a").unwrap();
        outlet.append("b").unwrap();
        assert_eq!(other.child_count(), 2);
        assert_eq!(other.first(), Some("a"));
        other.clear().unwrap();
        assert_eq!(outlet.child_count(), 0);
        assert!(outlet.with_children(|c| c.is_empty()));
    }
}
