//! Repository provider interface

use super::order::OrderRepository;
use super::product::ProductRepository;

/// Per-aggregate repository accessors behind one provider, so application
/// services depend on a single injected object.
pub trait RepositoryProvider: Send + Sync {
    fn products(&self) -> &dyn ProductRepository;
    fn orders(&self) -> &dyn OrderRepository;
}
