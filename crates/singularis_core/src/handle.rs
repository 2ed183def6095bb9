//! Typed generational handles
//!
//! A [`Handle`] names a value stored in a [`HandleMap`] without owning it.
//! Each storage entry carries a generation that is bumped when its value is
//! removed, so a handle taken before the removal no longer resolves. Using a
//! handle after its referent is gone is a caller error that the map detects;
//! it is never dereferenced blindly.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use alloc::vec::Vec;

use crate::error::HandleError;

/// A typed, copyable, non-owning reference into a [`HandleMap<T>`]
pub struct Handle<T> {
    index: u32,
    generation: u32,
    // fn() -> T keeps the handle Send + Sync whatever T is
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    const NULL_INDEX: u32 = u32::MAX;

    /// Build a handle from its raw parts
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: PhantomData,
        }
    }

    /// The null handle. It never resolves.
    #[inline]
    pub const fn null() -> Self {
        Self::new(Self::NULL_INDEX, 0)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.index == Self::NULL_INDEX
    }

    /// Storage index
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Generation the handle was issued with
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Pack into 64 bits (generation high, index low)
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        (self.generation as u64) << 32 | self.index as u64
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self::new(bits as u32, (bits >> 32) as u32)
    }
}

// Manual impls so T needs no bounds
impl<T> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = core::any::type_name::<T>();
        let short = name.rsplit("::").next().unwrap_or(name);
        if self.is_null() {
            write!(f, "{}(null)", short)
        } else {
            write!(f, "{}({}v{})", short, self.index, self.generation)
        }
    }
}

impl<T> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "{}v{}", self.index, self.generation)
        }
    }
}

struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Owning storage that issues [`Handle`]s to its values
pub struct HandleMap<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> HandleMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store a value and return a handle to it
    pub fn insert(&mut self, value: T) -> Handle<T> {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            entry.value = Some(value);
            return Handle::new(index, entry.generation);
        }

        let index = self.entries.len() as u32;
        assert!(index != u32::MAX, "handle map exhausted");
        self.entries.push(Entry {
            generation: 0,
            value: Some(value),
        });
        Handle::new(index, 0)
    }

    /// Remove a value. Every outstanding handle to it becomes stale.
    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let entry = self.live_entry_mut(handle).ok()?;
        let value = entry.value.take();
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(handle.index());
        self.len -= 1;
        value
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.try_get(handle).ok()
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.live_entry_mut(handle).ok()?.value.as_mut()
    }

    /// Like [`get`](Self::get) but says why the handle did not resolve
    pub fn try_get(&self, handle: Handle<T>) -> Result<&T, HandleError> {
        if handle.is_null() {
            return Err(HandleError::Null);
        }
        let entry = self
            .entries
            .get(handle.index() as usize)
            .ok_or(HandleError::OutOfBounds)?;
        if entry.generation != handle.generation() {
            return Err(HandleError::Stale);
        }
        entry.value.as_ref().ok_or(HandleError::Stale)
    }

    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.try_get(handle).is_ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live handles with their values, in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry
                .value
                .as_ref()
                .map(|v| (Handle::new(i as u32, entry.generation), v))
        })
    }

    fn live_entry_mut(&mut self, handle: Handle<T>) -> Result<&mut Entry<T>, HandleError> {
        if handle.is_null() {
            return Err(HandleError::Null);
        }
        let entry = self
            .entries
            .get_mut(handle.index() as usize)
            .ok_or(HandleError::OutOfBounds)?;
        if entry.generation != handle.generation() || entry.value.is_none() {
            return Err(HandleError::Stale);
        }
        Ok(entry)
    }
}

impl<T> Default for HandleMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
