//! DRAM Buffer Implementation.
//!
//! This module provides a safe wrapper around raw memory allocation for the
//! simulated DRAM. It supports lazy allocation via `mmap` on Unix systems so
//! a large configured memory only costs host pages that a trace actually
//! touches.

use std::slice;

/// A simplified wrapper around a raw memory buffer.
///
/// On Unix systems, this uses `mmap` to allocate anonymous memory, which
/// allows for lazy allocation (pages are only allocated by the OS when
/// accessed). On other platforms it falls back to a `Vec` allocation.
pub struct DramBuffer {
    ptr: *mut u8,
    size: usize,
    is_mmap: bool,
}

impl std::fmt::Debug for DramBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DramBuffer")
            .field("size", &self.size)
            .field("is_mmap", &self.is_mmap)
            .finish()
    }
}

// SAFETY: the buffer has a single owner; the simulator is single-threaded
// per cache instance and callers serialize accesses externally.
unsafe impl Send for DramBuffer {}
unsafe impl Sync for DramBuffer {}

impl DramBuffer {
    /// Creates a new DRAM buffer of the specified size.
    ///
    /// On Unix, uses `mmap` for lazy allocation; on other platforms,
    /// allocates a `Vec`.
    ///
    /// # Panics
    ///
    /// Panics if `mmap` fails on Unix.
    pub fn new(size: usize) -> Self {
        #[cfg(unix)]
        {
            use std::ptr;
            // SAFETY: anonymous private mapping with no file descriptor;
            // the result is checked against MAP_FAILED before use.
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    size,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };

            assert!(ptr != libc::MAP_FAILED, "Failed to mmap DRAM buffer of size {size}");

            Self {
                ptr: ptr as *mut u8,
                size,
                is_mmap: true,
            }
        }

        #[cfg(not(unix))]
        {
            let mut vec = vec![0u8; size];
            let ptr = vec.as_mut_ptr();
            std::mem::forget(vec);
            Self {
                ptr,
                size,
                is_mmap: false,
            }
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer has zero size.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reads a slice of memory safely.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the buffer size.
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        assert!(offset + len <= self.size, "DRAM read out of bounds");
        // SAFETY: bounds checked above; the mapping lives as long as self.
        unsafe { slice::from_raw_parts(self.ptr.add(offset), len) }
    }

    /// Writes a slice of memory safely.
    ///
    /// # Panics
    ///
    /// Panics if the write would exceed the buffer size.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) {
        assert!(offset + data.len() <= self.size, "DRAM write out of bounds");
        // SAFETY: bounds checked above; source and destination cannot
        // overlap because `data` is a borrowed external slice.
        unsafe {
            let dest = self.ptr.add(offset);
            std::ptr::copy_nonoverlapping(data.as_ptr(), dest, data.len());
        }
    }
}

impl Drop for DramBuffer {
    /// Deallocates the DRAM buffer.
    ///
    /// On Unix systems, unmaps the mmap'd memory. On other systems,
    /// reconstructs the Vec to trigger its destructor.
    fn drop(&mut self) {
        if self.is_mmap {
            #[cfg(unix)]
            // SAFETY: ptr/size are exactly what mmap returned in `new`.
            unsafe {
                let _ = libc::munmap(self.ptr as *mut _, self.size);
            }
        } else {
            #[cfg(not(unix))]
            // SAFETY: ptr/size/capacity are exactly what the forgotten Vec held.
            unsafe {
                let _ = Vec::from_raw_parts(self.ptr, self.size, self.size);
            }
        }
    }
}
