//! Node types interpreted straight from rules, without generating code.
//!
//! The node contract is split into capabilities: [`Identity`],
//! [`ChildrenAccess`] and [`DataAccess`] make up a [`Node`]; a [`NodeType`]
//! describes one kind of node and hands out [`Builder`]s. Builders follow the
//! same rules as the generated Java `Constructor` classes.

mod allocator;
mod error;
mod node;
mod registry;
mod regular;

pub use allocator::allocate;
pub use error::BuildError;
pub use node::{Builder, ChildrenAccess, DataAccess, Fragment, Identity, Node, NodeType};
pub use registry::TypeRegistry;
pub use regular::{RegularBuilder, RegularNode, RegularNodeType};
