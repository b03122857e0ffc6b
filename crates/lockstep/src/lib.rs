// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Lockstep
//!
//! Lazy sequence adaptors for index-driven loops. This crate provides a
//! bounded counting span and an element-wise zip over random-access
//! containers, so that composed `for` loops behave exactly like the
//! hand-written index loops they replace.
//!
//! ## Modules
//!
//! - `count`: A half-open counting span `[start, end)` over unsigned
//!   integers with validation and iteration support (`Iterator`,
//!   `ExactSizeIterator`, `FusedIterator`). Includes conversions to/from
//!   `std::ops::Range` and `RangeBounds`.
//! - `access`: The `Indexable` capability required of zip participants:
//!   a length query and by-index element access yielding copies.
//! - `zip`: The element-wise combiner `Zip` over tuples of `Indexable`
//!   sources, truncated to the shortest source, plus the variadic `zip!`
//!   macro and an `enumerate` convenience.
//!
//! ## Purpose
//!
//! Both adaptors are pure views: they never copy or own the sequences they
//! iterate. A span owns only its two bounds; a zip holds borrows of the
//! caller's containers, so lifetime soundness is enforced by the compiler
//! rather than by convention. Iteration is allocation-free and restartable;
//! requesting a fresh iterator never consumes the adaptor.
//!
//! Refer to each module for detailed APIs and examples.

pub mod access;
pub mod count;
pub mod zip;
