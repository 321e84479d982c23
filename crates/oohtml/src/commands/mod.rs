//! CLI command implementations.

pub(crate) mod block;
pub(crate) mod page;

pub(crate) use block::BlockArgs;
pub(crate) use page::PageArgs;
