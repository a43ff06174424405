// C entry points for hosts that draw the results themselves.
// Every result crossing the boundary is a JSON `ResultsView` string that the
// caller releases with `dictregex_free_string`.
use crate::config::AppConfig;
use crate::core::engine::SearchSession;
use crate::core::pager::ResultsView;
use crate::core::types::Locale;
use libc::c_char;
use serde_json::json;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::{Mutex, MutexGuard};

static SESSION: Mutex<Option<SearchSession>> = Mutex::new(None);

fn lock_session() -> MutexGuard<'static, Option<SearchSession>> {
    SESSION.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

unsafe fn str_arg<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(json: String) -> *mut c_char {
    CString::new(json)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

fn view_json(session: Option<&SearchSession>) -> String {
    let view = session.map(SearchSession::view).unwrap_or_else(ResultsView::empty);
    serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string())
}

/// Runs `f` on the session and returns the resulting view as JSON.
fn with_session(f: impl FnOnce(&mut SearchSession) -> Option<String>) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut guard = lock_session();
        match guard.as_mut() {
            Some(session) => f(&mut *session).unwrap_or_else(|| view_json(Some(&*session))),
            None => view_json(None),
        }
    }));
    let json = result.unwrap_or_else(|_| {
        eprintln!("[dictregex FATAL] panic inside the C API");
        view_json(None)
    });
    into_c_string(json)
}

/// Loads the word list for `locale` ("en", "he") using the user configuration.
/// Returns 0 on success, -1 on failure.
#[no_mangle]
pub unsafe extern "C" fn dictregex_init(locale: *const c_char) -> i32 {
    let code = str_arg(locale);
    let result = catch_unwind(|| {
        let mut config = AppConfig::load().unwrap_or_default();
        if !code.is_empty() {
            config.locale = Locale::from_code(code);
        }
        let words = config.word_provider().load(config.locale)?;
        let mut session = SearchSession::with_words(config.locale, config.dialect, words);
        session.set_colorize(config.colorize);
        *lock_session() = Some(session);
        Ok::<(), crate::error::DictRegexError>(())
    });
    match result {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "dictregex_init failed");
            -1
        }
        Err(_) => {
            eprintln!("[dictregex FATAL] panic during initialization");
            -1
        }
    }
}

#[no_mangle]
pub extern "C" fn dictregex_destroy() {
    *lock_session() = None;
}

/// Searches and returns the view. A rejected pattern yields
/// `{"error": "..."}` and clears the previous results.
#[no_mangle]
pub unsafe extern "C" fn dictregex_search(pattern: *const c_char, colorize: bool) -> *mut c_char {
    let pattern = str_arg(pattern);
    with_session(|session| {
        session.set_colorize_flag(colorize);
        match session.search(pattern) {
            Ok(_) => None,
            Err(e) => Some(json!({ "error": e.to_string() }).to_string()),
        }
    })
}

#[no_mangle]
pub extern "C" fn dictregex_show_all() -> *mut c_char {
    with_session(|session| {
        session.show_all();
        None
    })
}

#[no_mangle]
pub extern "C" fn dictregex_show_limited() -> *mut c_char {
    with_session(|session| {
        session.show_limited();
        None
    })
}

#[no_mangle]
pub extern "C" fn dictregex_load_more() -> *mut c_char {
    with_session(|session| {
        session.load_remaining();
        None
    })
}

#[no_mangle]
pub unsafe extern "C" fn dictregex_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
