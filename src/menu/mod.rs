mod key;
mod node;
mod tree;

pub use key::{KeyGenerator, NodeKey};
pub use node::MenuNode;
pub use tree::{DepthFirst, MenuTree};
