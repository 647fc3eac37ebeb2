// C ABI for the mobile shell. Every call is stateless: inputs come in as C
// strings (JSON where a list is needed) and results go out as JSON strings
// that must be released with `word_engine_free_string`.
use crate::core::engine::WordEngine;
use crate::core::types::MatchMode;
use crate::config::EngineConfig;
use serde::Serialize;
use std::collections::HashSet;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Reads a borrowed UTF-8 C string. Null or invalid UTF-8 yields None.
unsafe fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_json_ptr<T: Serialize>(value: &T) -> *mut c_char {
    serde_json::to_string(value)
        .ok()
        .and_then(|json| CString::new(json).ok())
        .map_or(ptr::null_mut(), CString::into_raw)
}

fn guarded<F: FnOnce() -> *mut c_char>(name: &str, f: F) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!(call = name, "panic in C ABI call");
        ptr::null_mut()
    })
}

fn lowercase_set(words: Vec<String>) -> HashSet<String> {
    words.into_iter().map(|w| w.trim().to_lowercase()).collect()
}

/// Returns the tokens of `text` as a JSON array.
///
/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn word_engine_tokenize(text: *const c_char) -> *mut c_char {
    let Some(text) = read_str(text) else {
        return ptr::null_mut();
    };
    guarded("tokenize", || into_json_ptr(&WordEngine::default().tokenize(text)))
}

/// Classifies `text` against a JSON array of membership words. `mode` is 0
/// when the set holds known words and 1 when it holds unknown words.
///
/// # Safety
/// Both pointers must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn word_engine_analyze(
    text: *const c_char,
    membership_json: *const c_char,
    mode: u8,
) -> *mut c_char {
    let (Some(text), Some(membership_json)) = (read_str(text), read_str(membership_json)) else {
        return ptr::null_mut();
    };
    let Some(mode) = MatchMode::from_code(mode) else {
        return ptr::null_mut();
    };
    guarded("analyze", || {
        let Ok(words) = serde_json::from_str::<Vec<String>>(membership_json) else {
            return ptr::null_mut();
        };
        let engine = WordEngine::new(EngineConfig { mode, ..EngineConfig::default() });
        into_json_ptr(&engine.analyze(text, &lowercase_set(words)))
    })
}

/// Ranks recurring words across a JSON array of texts, skipping a JSON
/// array of excluded words.
///
/// # Safety
/// Both pointers must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn word_engine_suggest(
    texts_json: *const c_char,
    exclude_json: *const c_char,
) -> *mut c_char {
    let (Some(texts_json), Some(exclude_json)) = (read_str(texts_json), read_str(exclude_json)) else {
        return ptr::null_mut();
    };
    guarded("suggest", || {
        let (Ok(texts), Ok(exclude)) = (
            serde_json::from_str::<Vec<String>>(texts_json),
            serde_json::from_str::<Vec<String>>(exclude_json),
        ) else {
            return ptr::null_mut();
        };
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        into_json_ptr(&WordEngine::default().suggest(&texts, &lowercase_set(exclude)))
    })
}

/// Releases a string returned by any `word_engine_*` call.
///
/// # Safety
/// `s` must be null or a pointer previously returned by this library.
#[no_mangle]
pub unsafe extern "C" fn word_engine_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ClassificationResult, WordSuggestion};

    fn call_json(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let json = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { word_engine_free_string(ptr) };
        json
    }

    #[test]
    fn tokenize_returns_json_array() {
        let text = CString::new("Hallo, hoe gaat het?!").unwrap();
        let json = call_json(unsafe { word_engine_tokenize(text.as_ptr()) });
        let tokens: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(tokens, vec!["hallo", "hoe", "gaat", "het"]);
    }

    #[test]
    fn analyze_with_known_mode() {
        let text = CString::new("De honden blaffen").unwrap();
        let membership = CString::new(r#"["De","hond"]"#).unwrap();
        let json = call_json(unsafe { word_engine_analyze(text.as_ptr(), membership.as_ptr(), 0) });
        let result: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.mode, MatchMode::MatchMeansKnown);
        assert_eq!(result.matched, vec!["de", "honden"]);
        assert_eq!(result.unmatched, vec!["blaffen"]);
    }

    #[test]
    fn suggest_returns_ranked_words() {
        let texts = CString::new(r#"["de kat eet","de kat slaapt"]"#).unwrap();
        let exclude = CString::new(r#"["de"]"#).unwrap();
        let json = call_json(unsafe { word_engine_suggest(texts.as_ptr(), exclude.as_ptr()) });
        let out: Vec<WordSuggestion> = serde_json::from_str(&json).unwrap();
        assert_eq!(out, vec![WordSuggestion { word: "kat".into(), frequency: 2 }]);
    }

    #[test]
    fn bad_input_yields_null() {
        let text = CString::new("hallo").unwrap();
        let bad = CString::new("not json").unwrap();
        unsafe {
            assert!(word_engine_tokenize(ptr::null()).is_null());
            assert!(word_engine_analyze(text.as_ptr(), bad.as_ptr(), 0).is_null());
            assert!(word_engine_analyze(text.as_ptr(), bad.as_ptr(), 9).is_null());
            word_engine_free_string(ptr::null_mut());
        }
    }
}
