/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A type-keyed bag of request properties.
//!
//! Middleware reads and writes configuration (region, endpoint resolver,
//! credentials provider, signing parameters) from the bag keyed by type, so
//! stages stay decoupled from one another.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

type AnyMap = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

#[derive(Default)]
pub struct PropertyBag {
    map: AnyMap,
}

impl PropertyBag {
    pub fn new() -> Self {
        PropertyBag {
            map: AnyMap::default(),
        }
    }

    /// Insert a value, replacing (and returning) any previous value of the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBag")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[test]
    fn insert_get_remove() {
        let mut bag = PropertyBag::new();
        #[derive(Debug, PartialEq)]
        struct Marker(u32);

        assert!(bag.get::<Marker>().is_none());
        assert_eq!(bag.insert(Marker(1)), None);
        assert_eq!(bag.insert(Marker(2)), Some(Marker(1)));
        assert_eq!(bag.get::<Marker>(), Some(&Marker(2)));
        assert_eq!(bag.remove::<Marker>(), Some(Marker(2)));
        assert!(!bag.contains::<Marker>());
    }
}
