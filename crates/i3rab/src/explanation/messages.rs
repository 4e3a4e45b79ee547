//! Fixed messages returned outside of the grammar categories

/// The analyzer returned no candidate for the word
pub const NO_ANALYSIS_MESSAGE: &str = "لم يتم إيجاد تحليل لهذه الكلمة.";

/// A noun whose diacritized form carries no recognized case mark
pub const UNDETERMINED_MESSAGE: &str = "اسم مبني أو غير معلوم الإعراب بدقة.";

/// No rule matched
pub const UNAVAILABLE_MESSAGE: &str = "شرح إعرابي غير متوفر لهذه الكلمة.";

/// The request carried no usable sentence
pub const EMPTY_SENTENCE_MESSAGE: &str = "يرجى إدخال جملة صحيحة.";
