//! Cascading selection over the state to booth hierarchy.
//!
//! Every level's options are narrowed to the children of the selection one level up, and
//! selections that fall outside their narrowed options are cleared together with everything
//! below them. The module is synchronous and performs no I/O: callers load the full option
//! lists once and resolve as often as selections change.

mod level;
mod resolver;

pub use level::Level;
pub use resolver::{
    resolve_children, Cascade, LevelConfig, LevelOption, Resolution, ResolvedLevel, Selections,
};
