//! # rootword
//!
//! Decomposes an English word into the classical roots and suffixes of a lexicon and
//! renders the result as an annotated tree or as tab-separated span rows.
//!
//! File Layout
//!
//! src/rootword
//!   ├── pattern        Label grammar → matchers (roots: prefix, suffixes: end-anchored)
//!   ├── lexicon        Compiled, index-stable entry lists (+ CSV loader)
//!   ├── segmentation   Greedy root scan and suffix scan
//!   ├── fragment       Match lists → gap-free fragment sequence
//!   ├── formats        Renderers (tree, dat) behind a registry
//!   ├── pipeline       Analyzer tying the stages together
//!   └── config         Layered runtime configuration
//!
//! Only `lexicon::loader` and `config` touch the filesystem. Everything else works on
//! already-parsed rows and a word string.
//!
//! For test helpers, see the [testing module](rootword::testing).

pub mod rootword;
