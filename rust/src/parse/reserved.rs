use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::error::{SyntaxError, SyntaxErrorType, SyntaxResult};
use crate::lex::RESERVED_KEYWORD_STRS;
use crate::parse::host::ReservedWordCheck;
use crate::parse::parser::{Parser, TopLevelMode};
use crate::source::SourceRange;

lazy_static! {
    static ref STRICT_RESERVED_WORDS: HashSet<&'static [u8]> = {
        let mut set = HashSet::<&'static [u8]>::new();
        set.insert(b"implements");
        set.insert(b"interface");
        set.insert(b"let");
        set.insert(b"package");
        set.insert(b"private");
        set.insert(b"protected");
        set.insert(b"public");
        set.insert(b"static");
        set.insert(b"yield");
        set
    };

    static ref STRICT_BIND_RESERVED_WORDS: HashSet<&'static [u8]> = {
        let mut set = HashSet::<&'static [u8]>::new();
        set.insert(b"arguments");
        set.insert(b"eval");
        set
    };
}

fn reserved(word: &SourceRange, typ: SyntaxErrorType) -> SyntaxError {
    SyntaxError::from_loc(word, typ, None)
}

impl ReservedWordCheck for Parser {
    fn check_reserved_word(
        &self,
        word: &SourceRange,
        check_keywords: bool,
        is_binding: bool,
    ) -> SyntaxResult<()> {
        let name = word.as_slice();
        if check_keywords && RESERVED_KEYWORD_STRS.contains(name) {
            return Err(reserved(word, SyntaxErrorType::ReservedWordBinding));
        };
        let state = self.state();
        if state.strict {
            if STRICT_RESERVED_WORDS.contains(name) {
                return Err(reserved(word, SyntaxErrorType::ReservedWordBinding));
            };
            if is_binding && STRICT_BIND_RESERVED_WORDS.contains(name) {
                return Err(reserved(word, SyntaxErrorType::StrictEvalOrArgumentsBinding));
            };
        };
        if state.in_generator && name == b"yield" {
            return Err(reserved(word, SyntaxErrorType::ReservedWordBinding));
        };
        if self.options().mode == TopLevelMode::Module && name == b"await" {
            return Err(reserved(word, SyntaxErrorType::ReservedWordBinding));
        };
        Ok(())
    }
}
