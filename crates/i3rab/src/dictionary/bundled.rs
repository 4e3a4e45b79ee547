//! Lexicon compiled into the binary
//!
//! MeCab-format source files shipped under `dict/`. They are small enough to be built
//! into a vibrato-rkyv dictionary at startup, so no download or cache is needed.
//!
//! Connection ids: 0 BOS/EOS, 1 conjunction or future proclitic, 2 caseless stem,
//! 3 enclitic, 4 prepositional proclitic, 5/6/7 nominative/accusative/genitive noun,
//! 8 article after a preposition, 9 verb, 10 article.

/// Lexicon entries file name
pub const LEXICON_FILE: &str = "lex.csv";
/// Connection cost matrix file name
pub const MATRIX_FILE: &str = "matrix.def";
/// Character category definition file name
pub const CHAR_DEF_FILE: &str = "char.def";
/// Unknown word definition file name
pub const UNK_DEF_FILE: &str = "unk.def";

/// Bundled `lex.csv`
pub const LEXICON: &str = include_str!("../../dict/lex.csv");
/// Bundled `matrix.def`
pub const MATRIX: &str = include_str!("../../dict/matrix.def");
/// Bundled `char.def`
pub const CHAR_DEF: &str = include_str!("../../dict/char.def");
/// Bundled `unk.def`
pub const UNK_DEF: &str = include_str!("../../dict/unk.def");
