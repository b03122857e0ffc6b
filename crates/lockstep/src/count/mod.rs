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

//! # Counting Sequences
//!
//! A bounded, ascending counting span over unsigned integers. This module
//! centers on `Span`, a half-open `[start, end)` pair designed to drive
//! `for` loops the way an explicit index loop would, without the index
//! bookkeeping.
//!
//! ## Submodules
//!
//! - `span`: The `Span` type with validation (`new`/`try_new`/
//!   `new_unchecked`), accessors, forward-only iteration
//!   (`Iterator`, `ExactSizeIterator`, `FusedIterator`), and conversions
//!   to/from `std::ops::Range`.
//!
//! ## Motivation
//!
//! Index-driven code is riddled with off-by-one hazards. A half-open span
//! fixes the bounds once, at construction, and every iteration pass over it
//! yields exactly the same ascending indices.
//!
//! Refer to the `span` module for detailed APIs and examples.

pub mod span;
