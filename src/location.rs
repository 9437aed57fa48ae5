use core::marker::PhantomData;

use crate::err::Error;
use crate::sync::{AtomicI32, AtomicI64, AtomicUsize};

/// An opaque handle to one 32-bit integer storage location.
///
/// The handle does not own the storage; the caller's data structure does. A
/// handle constructed with [Int32Location::new] is bound for the lifetime of
/// the borrowed storage. An unbound handle (from [Int32Location::unbound], or
/// a null raw address) designates no storage at all, and every operation on it
/// fails with [Error::InvalidLocation] before touching memory.
#[derive(Debug, Clone, Copy)]
pub struct Int32Location<'a> {
    storage: *mut AtomicI32,
    _storage_lifetime: PhantomData<&'a AtomicI32>,
}

impl<'a> Int32Location<'a> {
    /// Create a handle bound to live storage.
    pub fn new(storage: &'a AtomicI32) -> Self {
        Self {
            storage: storage as *const AtomicI32 as *mut AtomicI32,
            _storage_lifetime: PhantomData,
        }
    }

    /// Create a handle which designates no storage.
    pub const fn unbound() -> Self {
        Self {
            storage: core::ptr::null_mut(),
            _storage_lifetime: PhantomData,
        }
    }

    /// Reconstruct a handle from a raw storage address.
    ///
    /// # Safety
    ///
    /// `address` must either be null or point to storage which is live and
    /// properly aligned for the caller-chosen lifetime `'a`.
    pub unsafe fn from_raw(address: *mut AtomicI32) -> Self {
        Self {
            storage: address,
            _storage_lifetime: PhantomData,
        }
    }

    /// Whether this handle currently designates storage.
    pub fn is_bound(&self) -> bool {
        !self.storage.is_null()
    }

    pub(crate) fn bind(&self) -> Result<&'a AtomicI32, Error> {
        unsafe { self.storage.as_ref() }.ok_or(Error::InvalidLocation)
    }
}

unsafe impl Send for Int32Location<'_> {}
unsafe impl Sync for Int32Location<'_> {}

/// An opaque handle to one 64-bit integer storage location.
///
/// See [Int32Location]; only the width differs.
#[derive(Debug, Clone, Copy)]
pub struct Int64Location<'a> {
    storage: *mut AtomicI64,
    _storage_lifetime: PhantomData<&'a AtomicI64>,
}

impl<'a> Int64Location<'a> {
    /// Create a handle bound to live storage.
    pub fn new(storage: &'a AtomicI64) -> Self {
        Self {
            storage: storage as *const AtomicI64 as *mut AtomicI64,
            _storage_lifetime: PhantomData,
        }
    }

    /// Create a handle which designates no storage.
    pub const fn unbound() -> Self {
        Self {
            storage: core::ptr::null_mut(),
            _storage_lifetime: PhantomData,
        }
    }

    /// Reconstruct a handle from a raw storage address.
    ///
    /// # Safety
    ///
    /// `address` must either be null or point to storage which is live and
    /// properly aligned for the caller-chosen lifetime `'a`.
    pub unsafe fn from_raw(address: *mut AtomicI64) -> Self {
        Self {
            storage: address,
            _storage_lifetime: PhantomData,
        }
    }

    /// Whether this handle currently designates storage.
    pub fn is_bound(&self) -> bool {
        !self.storage.is_null()
    }

    pub(crate) fn bind(&self) -> Result<&'a AtomicI64, Error> {
        unsafe { self.storage.as_ref() }.ok_or(Error::InvalidLocation)
    }
}

unsafe impl Send for Int64Location<'_> {}
unsafe impl Sync for Int64Location<'_> {}

/// An opaque handle to one reference slot inside collector-tracked storage.
///
/// The slot holds a single address-sized word: the erased form of a `*mut T`,
/// where null is an ordinary value. Stores of non-null references through this
/// handle are paired with the collector's write barrier; see [WriteBarrier].
///
/// [WriteBarrier]: crate::WriteBarrier
pub struct RefLocation<'a, T> {
    slot: *mut AtomicUsize,
    _slot_lifetime: PhantomData<&'a AtomicUsize>,
    _referent: PhantomData<*mut T>,
}

impl<'a, T> RefLocation<'a, T> {
    /// Create a handle bound to a live slot.
    pub fn new(slot: &'a AtomicUsize) -> Self {
        Self {
            slot: slot as *const AtomicUsize as *mut AtomicUsize,
            _slot_lifetime: PhantomData,
            _referent: PhantomData,
        }
    }

    /// Create a handle which designates no slot.
    pub const fn unbound() -> Self {
        Self {
            slot: core::ptr::null_mut(),
            _slot_lifetime: PhantomData,
            _referent: PhantomData,
        }
    }

    /// Reconstruct a handle from a raw slot address.
    ///
    /// # Safety
    ///
    /// `address` must either be null or point to a slot which is live and
    /// properly aligned for the caller-chosen lifetime `'a`.
    pub unsafe fn from_raw(address: *mut AtomicUsize) -> Self {
        Self {
            slot: address,
            _slot_lifetime: PhantomData,
            _referent: PhantomData,
        }
    }

    /// Whether this handle currently designates a slot.
    pub fn is_bound(&self) -> bool {
        !self.slot.is_null()
    }

    pub(crate) fn bind(&self) -> Result<&'a AtomicUsize, Error> {
        unsafe { self.slot.as_ref() }.ok_or(Error::InvalidLocation)
    }

    /// The slot address handed to the collector's barrier hook.
    pub(crate) fn slot_address(&self) -> *mut () {
        self.slot as *mut ()
    }
}

// manual impls keep `T` free of Debug/Clone bounds
impl<T> core::fmt::Debug for RefLocation<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefLocation").field("slot", &self.slot).finish()
    }
}

impl<T> Clone for RefLocation<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RefLocation<'_, T> {}

unsafe impl<T> Send for RefLocation<'_, T> {}
unsafe impl<T> Sync for RefLocation<'_, T> {}
