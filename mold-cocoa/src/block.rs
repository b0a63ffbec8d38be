//! Hand-built block literals.
//!
//! A block is a small struct the host treats as an object: an `isa` pointer, flag
//! bits, an invoke function and a descriptor. Only global blocks are built here.
//! They are never copied or disposed by the host, so the context they carry lives
//! for the rest of the process.
//!
//! Layout (64-bit):
//!
//! ```text
//! offset  field
//!  0      isa         &_NSConcreteGlobalBlock
//!  8      flags       BLOCK_IS_GLOBAL | BLOCK_HAS_SIGNATURE
//! 12      reserved    0
//! 16      invoke      fn(block, arg)
//! 24      descriptor  &BlockDescriptor
//! 32      context     captured state
//! ```

use std::ffi::{CStr, c_char, c_ulong, c_void};
use std::mem;

use crate::dispatch::Id;

pub const BLOCK_IS_GLOBAL: i32 = 1 << 28;
pub const BLOCK_HAS_SIGNATURE: i32 = 1 << 30;

/// Encoding of `void (^)(id)`.
pub const OBJECT_CALLBACK_SIGNATURE: &CStr = c"v16@?0@8";

#[repr(C)]
struct BlockIsa {
    _opaque: [u8; 0],
}

#[link(name = "System", kind = "dylib")]
unsafe extern "C" {
    static _NSConcreteGlobalBlock: BlockIsa;
}

#[repr(C)]
#[derive(Debug)]
pub struct BlockDescriptor {
    reserved: c_ulong,
    size: c_ulong,
    signature: *const c_char,
}

// Only ever points at 'static C string literals.
unsafe impl Sync for BlockDescriptor {}

impl BlockDescriptor {
    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn signature(&self) -> &'static CStr {
        unsafe { CStr::from_ptr(self.signature) }
    }
}

/// Descriptor for a `void (^)(id)` block carrying a `C`.
pub const fn object_callback<C>() -> BlockDescriptor {
    BlockDescriptor {
        reserved: 0,
        size: mem::size_of::<GlobalBlock<C>>() as c_ulong,
        signature: OBJECT_CALLBACK_SIGNATURE.as_ptr(),
    }
}

pub type Invoke<C> = unsafe extern "C" fn(*const GlobalBlock<C>, Id);

#[repr(C)]
pub struct GlobalBlock<C> {
    isa: *const c_void,
    flags: i32,
    reserved: i32,
    invoke: Invoke<C>,
    descriptor: *const BlockDescriptor,
    context: C,
}

impl<C> GlobalBlock<C> {
    /// Build a block and leak it.
    ///
    /// `descriptor` must come from [`object_callback::<C>`] so its size matches.
    pub fn leak(invoke: Invoke<C>, descriptor: &'static BlockDescriptor, context: C) -> &'static Self
    where
        C: 'static,
    {
        debug_assert_eq!(descriptor.size(), mem::size_of::<Self>());
        Box::leak(Box::new(Self {
            isa: (&raw const _NSConcreteGlobalBlock).cast(),
            flags: BLOCK_IS_GLOBAL | BLOCK_HAS_SIGNATURE,
            reserved: 0,
            invoke,
            descriptor,
            context,
        }))
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn flags(&self) -> i32 {
        self.flags
    }

    /// The block as an object argument for a dispatched call.
    pub fn as_ptr(&self) -> *const c_void {
        (self as *const Self).cast()
    }

    /// Call the block the way the host does.
    #[cfg(test)]
    pub(crate) unsafe fn call(&self, arg: Id) {
        unsafe { (self.invoke)(self, arg) }
    }
}
