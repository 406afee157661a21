use alloc::boxed::Box;
use core::any::{Any, type_name};

use crate::ops::Implements;

/// The concrete type created for an interface-typed value.
///
/// Built by `#[derive(Serial)]` from `#[serial(implementation = C)]`.
#[derive(Clone, Copy)]
pub struct Implementation {
    type_path: &'static str,
    create: fn() -> Box<dyn Any + Send + Sync>,
}

impl Implementation {
    /// A factory building `L` (usually `Box<dyn Trait>`) from a default `C`.
    pub fn of<L: Implements<C>, C: 'static>() -> Self {
        Self {
            type_path: type_name::<C>(),
            create: create_with::<L, C>,
        }
    }

    /// Type name of the concrete type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// A fresh boxed `L`.
    #[inline]
    pub fn create(&self) -> Box<dyn Any + Send + Sync> {
        (self.create)()
    }
}

fn create_with<L: Implements<C>, C>() -> Box<dyn Any + Send + Sync> {
    Box::new(L::create())
}
