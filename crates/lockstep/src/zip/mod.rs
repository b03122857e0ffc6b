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

//! # Element-wise Combination
//!
//! Iterate several random-access containers in lock step, yielding one
//! tuple of element copies per shared index and stopping at the shortest
//! container.
//!
//! ## Submodules
//!
//! - `sources`: The `IndexableTuple` capability implemented for tuples of
//!   `Indexable` sources up to arity twelve: the shortest-length query and
//!   per-index row assembly.
//! - `zipped`: The `Zip` combiner and its iterator, the `zip` and
//!   `enumerate` constructors, and the variadic `zip!` macro.
//!
//! ## Motivation
//!
//! Walking two or more containers with one shared index is easy to get
//! subtly wrong by hand (length mismatches, stale bounds). The combiner
//! fixes the common prefix once, at construction, and iterates exactly
//! that.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod sources;
pub mod zipped;
