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

//! # Random Access Capability
//!
//! The container interface the element-wise combiner builds on. Any type
//! that can report its length and hand out a copy of the element at a
//! given index qualifies as a zip participant.
//!
//! ## Submodules
//!
//! - `indexable`: The `Indexable` trait plus implementations for slices,
//!   arrays, `Vec`, `VecDeque`, boxed slices, references, and counting
//!   spans.
//!
//! ## Motivation
//!
//! Expressing the requirement as a trait bound (rather than duck typing)
//! keeps the combiner generic over heterogeneous containers while making
//! the contract — stable length, by-index access, element copies — explicit
//! at the type level.
//!
//! Refer to the `indexable` module for detailed APIs and examples.

pub mod indexable;
